pub use neurite_core::{init_logging, Metrics};

pub mod behavior {
    pub use neurite_data::data::behavior::*;
}
pub mod circuit {
    pub use neurite_data::data::circuit::*;
}
pub mod genome {
    pub use neurite_data::data::genome::*;
}
pub mod report {
    pub use neurite_data::data::report::*;
}
pub mod config {
    pub use neurite_core::config::*;
}
pub mod connectome {
    pub use neurite_core::connectome::*;
}
pub mod simulate {
    pub use neurite_core::simulate::*;
}
pub mod validate {
    pub use neurite_core::validate::*;
}
pub mod evolution {
    pub use neurite_core::evolution::*;
}
pub mod metrics {
    pub use neurite_core::metrics::*;
}
