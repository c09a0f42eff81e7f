// src/domain/pricing.rs

use crate::domain::listing::Listing;
use crate::errors::DomainError;

/// Price per square meter, in millions.
///
/// The generator never produces a zero area, but listings built by hand
/// (fixtures, external callers) might, so the division is guarded.
pub fn price_per_area(listing: &Listing) -> Result<f64, DomainError> {
    if listing.area == 0 {
        return Err(DomainError::ZeroArea);
    }
    Ok(f64::from(listing.price) / f64::from(listing.area))
}

/// Flat-interest monthly installment: the full price is inflated once by
/// the rate, then split evenly across every month of the term. This is
/// the documented model, not an amortization schedule.
pub fn simulate_installment(
    listing: &Listing,
    interest_rate_percent: f64,
    years: u32,
) -> Result<f64, DomainError> {
    if years == 0 {
        return Err(DomainError::InvalidArgument(
            "years must be greater than zero".to_string(),
        ));
    }
    if !interest_rate_percent.is_finite() || interest_rate_percent < 0.0 {
        return Err(DomainError::InvalidArgument(
            "interest rate must be a non-negative number".to_string(),
        ));
    }

    let total = f64::from(listing.price) * (1.0 + interest_rate_percent / 100.0);
    Ok(total / (f64::from(years) * 12.0))
}
