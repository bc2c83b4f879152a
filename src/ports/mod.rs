mod tap_store;

pub use tap_store::TapStore;
