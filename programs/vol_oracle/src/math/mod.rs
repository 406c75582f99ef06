pub mod full_math;
pub mod price_math;
pub mod tick_math;
pub mod welford;
