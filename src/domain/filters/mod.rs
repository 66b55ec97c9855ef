//! Accumulated search criteria and the reconciliation merge.

mod car_filters;
mod reconcile;

pub use car_filters::CarFilters;
pub use reconcile::reconcile;
