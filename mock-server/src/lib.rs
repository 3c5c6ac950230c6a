use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub price: f64,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub img_src: String,
}

#[derive(Deserialize)]
pub struct ListingQuery {
    pub filter: Option<String>,
}

pub type Db = Arc<Vec<Listing>>;

/// A handful of records in the shape the production server returns.
pub fn fixtures() -> Vec<Listing> {
    let listing = |price: f64, id: &str, kind: &str, image: &str| Listing {
        price,
        id: id.to_string(),
        kind: kind.to_string(),
        img_src: format!("http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/{image}"),
    };
    vec![
        listing(450_000.0, "424906", "rent", "1000ML0044631300305227E03_DXXX.jpg"),
        listing(8_000_000.0, "424907", "buy", "1000MR0044631300503690E01_DXXX.jpg"),
        listing(11_000_000.0, "424908", "rent", "1000MR0044631290503689E01_DXXX.jpg"),
        listing(8_000_000.0, "424905", "buy", "1000MR0044631280503688E01_DXXX.jpg"),
    ]
}

pub fn app() -> Router {
    app_with(fixtures())
}

pub fn app_with(listings: Vec<Listing>) -> Router {
    let db: Db = Arc::new(listings);
    Router::new()
        .route("/realestate", get(list_listings))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// `rent` and `buy` select by type; anything else, including no filter,
/// returns every listing.
async fn list_listings(
    State(db): State<Db>,
    Query(query): Query<ListingQuery>,
) -> Json<Vec<Listing>> {
    let listings = match query.filter.as_deref() {
        Some(kind @ ("rent" | "buy")) => db.iter().filter(|l| l.kind == kind).cloned().collect(),
        _ => db.to_vec(),
    };
    Json(listings)
}
