pub mod bouquet;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod expiring;
pub mod gallery;
pub mod greeting;
pub mod hearts;
pub mod page;
pub mod pointer;
pub mod reveal;
pub mod section;
pub mod timer;

pub use bouquet::*;
pub use config::*;
pub use constants::*;
pub use envelope::*;
pub use expiring::*;
pub use gallery::*;
pub use greeting::*;
pub use hearts::*;
pub use page::*;
pub use pointer::*;
pub use reveal::*;
pub use section::*;
pub use timer::*;
