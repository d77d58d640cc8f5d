// Landing page sections

pub mod actions;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod icons;
mod nav;
mod pricing;

pub use features::{FEATURES, Feature, Features};
pub use footer::{Footer, LINK_GROUPS};
pub use hero::{Hero, STATS};
pub use how_it_works::{HowItWorks, STEPS, Step, progress};
pub use icons::*;
pub use nav::Nav;
pub use pricing::{FAQ, PLANS, Plan, Pricing};
