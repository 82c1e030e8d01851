pub mod demo;
pub mod parcheesi;
pub mod probability;

pub use parcheesi::Error;
