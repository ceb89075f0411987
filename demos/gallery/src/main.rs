//! Gallery entry point. Mounts one demo subtree at a time; which one is a
//! runtime choice (tab buttons, or the driver's `demo` command).

mod app;
mod catalog;
mod driver;
mod pages;
#[cfg(test)]
mod tests;
mod ui;

use crate::catalog::Catalog;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let catalog = Catalog::load()?;
    driver::run(catalog)
}
