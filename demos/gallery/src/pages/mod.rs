pub mod counter;
pub mod custom_router;
pub mod reference;
pub mod routed;
pub mod styled;
