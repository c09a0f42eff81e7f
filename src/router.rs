use crate::catalog::{Catalog, SearchCriteria};
use crate::domain::listing::City;
use crate::domain::pricing;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates::pages;
use astra::Request;
use chrono::Utc;
use std::str::FromStr;

// The original demo's simulator defaults.
const DEFAULT_RATE_PERCENT: f64 = 5.0;
const DEFAULT_YEARS: u32 = 15;

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(pages::home_page(catalog)),
        ("GET", "/search") => search(&req, catalog),
        ("GET", "/listing") => detail(&req, catalog),
        ("GET", "/installment") => installment(&req, catalog),
        ("GET", "/compare") => compare(&req, catalog),
        ("GET", "/api/listings") => api_listings(&req, catalog),
        _ => Err(ServerError::NotFound),
    }
}

fn search(req: &Request, catalog: &Catalog) -> ResultResp {
    let params = parse_query(req);
    let criteria = criteria_from_query(&params)?;
    let results = catalog.filter(&criteria);

    html_response(pages::search_page(&pages::SearchVm {
        criteria,
        results,
        locations: catalog.distinct_locations(),
    }))
}

fn detail(req: &Request, catalog: &Catalog) -> ResultResp {
    let params = parse_query(req);
    let id: u32 = required_param(&params, "id")?;
    let listing = catalog.find_by_id(id)?;

    html_response(pages::detail_page(&pages::DetailVm {
        listing,
        age_years: listing.age_in_years(Utc::now()),
    }))
}

fn installment(req: &Request, catalog: &Catalog) -> ResultResp {
    let params = parse_query(req);

    // With no id yet, default to the first listing so the form is usable
    // straight from the nav link.
    let id: u32 = match query_value(&params, "id") {
        Some(_) => required_param(&params, "id")?,
        None if catalog.is_empty() => {
            return Err(ServerError::Internal("catalog is empty".to_string()))
        }
        None => catalog.listings()[0].id,
    };
    let rate: f64 = optional_param(&params, "rate")?.unwrap_or(DEFAULT_RATE_PERCENT);
    let years: u32 = optional_param(&params, "years")?.unwrap_or(DEFAULT_YEARS);

    let listing = catalog.find_by_id(id)?;
    let monthly = pricing::simulate_installment(listing, rate, years)?;

    html_response(pages::installment_page(&pages::InstallmentVm {
        listing,
        all_ids: catalog.listings().iter().map(|l| l.id).collect(),
        interest_rate_percent: rate,
        years,
        monthly,
    }))
}

fn compare(req: &Request, catalog: &Catalog) -> ResultResp {
    let params = parse_query(req);

    let mut ids = Vec::new();
    for (key, value) in &params {
        if key == "ids" && !value.is_empty() {
            let id: u32 = value.parse().map_err(|_| {
                ServerError::BadRequest(format!("invalid listing id: {value}"))
            })?;
            ids.push(id);
        }
    }

    html_response(pages::compare_page(&pages::CompareVm {
        selected: catalog.find_by_ids(&ids),
        all: catalog.listings(),
    }))
}

fn api_listings(req: &Request, catalog: &Catalog) -> ResultResp {
    let params = parse_query(req);
    let criteria = criteria_from_query(&params)?;
    json_response(&catalog.filter(&criteria))
}

/// Build search criteria from query parameters, starting from the
/// match-all defaults. "any" (or an empty value) leaves the location open.
fn criteria_from_query(params: &[(String, String)]) -> Result<SearchCriteria, ServerError> {
    let mut criteria = SearchCriteria::default();

    if let Some(raw) = query_value(params, "location") {
        if !raw.is_empty() && !raw.eq_ignore_ascii_case("any") {
            criteria.location = Some(raw.parse::<City>().map_err(ServerError::BadRequest)?);
        }
    }
    if let Some(min_price) = optional_param(params, "min_price")? {
        criteria.min_price = min_price;
    }
    if let Some(max_price) = optional_param(params, "max_price")? {
        criteria.max_price = max_price;
    }
    if let Some(min_bedrooms) = optional_param(params, "min_bedrooms")? {
        criteria.min_bedrooms = min_bedrooms;
    }

    Ok(criteria)
}

fn parse_query(req: &Request) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                pairs.push((k.to_string(), v.to_string()));
            }
        }
    }

    pairs
}

fn query_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// A parameter that may be absent (or blank), but must parse when given.
fn optional_param<T: FromStr>(
    params: &[(String, String)],
    key: &str,
) -> Result<Option<T>, ServerError> {
    match query_value(params, key) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("invalid value for {key}: {raw}"))),
    }
}

fn required_param<T: FromStr>(params: &[(String, String)], key: &str) -> Result<T, ServerError> {
    optional_param(params, key)?
        .ok_or_else(|| ServerError::BadRequest(format!("missing parameter: {key}")))
}
