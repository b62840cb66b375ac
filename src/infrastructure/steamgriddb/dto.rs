use serde::Deserialize;

/// `GET /grids/steam/{id}` response.
#[derive(Debug, Deserialize)]
pub struct GridsResponse {
    /// Whether the lookup succeeded.
    pub success: bool,
    /// Grid images, in API order.
    #[serde(default)]
    pub data: Vec<GridDto>,
    /// Error messages when `success` is false.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One grid image.
#[derive(Debug, Deserialize)]
pub struct GridDto {
    /// Direct image URL.
    pub url: String,
    /// Community score.
    #[serde(default)]
    pub score: f64,
}
