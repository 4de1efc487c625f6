//! Truncated VSOP87D tables (Meeus, *Astronomical Algorithms*, App. III).

pub mod earth;
pub mod jupiter;
pub mod mars;
pub mod mercury;
pub mod saturn;
pub mod venus;

pub use earth::EARTH;
pub use jupiter::JUPITER;
pub use mars::MARS;
pub use mercury::MERCURY;
pub use saturn::SATURN;
pub use venus::VENUS;
