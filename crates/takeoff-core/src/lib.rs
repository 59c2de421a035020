pub mod audio;
pub mod constants;
pub mod controller;
pub mod cue;
pub mod growth;
pub mod info;
pub mod input;
pub mod instances;
pub mod mode;
pub mod scene;
pub mod state;

pub use audio::*;
pub use controller::*;
pub use growth::*;
pub use mode::*;
pub use scene::*;
pub use state::*;
