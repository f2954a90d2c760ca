//! Concrete test functions, one per file

pub mod bohachevsky2;
pub mod bohachevsky3;
pub mod goldstein_price;
pub mod power_sum;
pub mod rastrigin;
pub mod trid;

pub use bohachevsky2::{Bohachevsky2, bohachevsky2};
pub use bohachevsky3::{Bohachevsky3, bohachevsky3};
pub use goldstein_price::{GoldsteinPrice, goldstein_price, goldstein_price_grad, goldstein_price_hess};
pub use power_sum::{POWER_SUM_TARGETS, PowerSum, power_sum};
pub use rastrigin::{Rastrigin, rastrigin};
pub use trid::{Trid, trid};
