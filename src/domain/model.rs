use serde::{Deserialize, Serialize};

/// One cart/order line as sent by the storefront. Other fields (price, name) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingRequest {
    #[serde(rename = "zipCode", default)]
    pub zip_code: Option<String>,
    #[serde(rename = "zipCodeDestination", default)]
    pub zip_code_destination: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
}

impl ShippingRequest {
    pub fn new(zip_code: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            zip_code: Some(zip_code.into()),
            zip_code_destination: None,
            items: Some(items),
        }
    }

    /// `zipCode` wins over the legacy `zipCodeDestination`; an empty value counts as absent.
    pub fn destination(&self) -> Option<&str> {
        self.zip_code
            .as_deref()
            .filter(|zip| !zip.is_empty())
            .or_else(|| {
                self.zip_code_destination
                    .as_deref()
                    .filter(|zip| !zip.is_empty())
            })
    }

    pub fn items(&self) -> &[LineItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "PAC")]
    Standard,
    #[serde(rename = "SEDEX")]
    Express,
}

impl ServiceType {
    pub const ALL: [ServiceType; 2] = [ServiceType::Standard, ServiceType::Express];

    pub fn display_name(self) -> &'static str {
        match self {
            ServiceType::Standard => "PAC (Convencional)",
            ServiceType::Express => "SEDEX (Express)",
        }
    }

    pub fn id_prefix(self) -> &'static str {
        match self {
            ServiceType::Standard => "pac",
            ServiceType::Express => "sedex",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ServiceType::Standard => 1.0,
            ServiceType::Express => 1.7,
        }
    }

    pub fn is_express(self) -> bool {
        matches!(self, ServiceType::Express)
    }
}

impl std::str::FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pac" | "standard" => Ok(ServiceType::Standard),
            "sedex" | "express" => Ok(ServiceType::Express),
            other => Err(format!("unknown service type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionTier {
    Metro,
    SouthSoutheast,
    CentralNortheast,
    North,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub id: String,
    pub service_type: ServiceType,
    pub name: String,
    pub rate: f64,
    pub delivery_days: u32,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
}

impl ShippingQuote {
    pub fn new(service: ServiceType, rate: f64, delivery_days: u32, zip_code: &str) -> Self {
        Self {
            id: format!("{}-{}", service.id_prefix(), zip_code),
            service_type: service,
            name: service.display_name().to_string(),
            rate,
            delivery_days,
            zip_code: zip_code.to_string(),
        }
    }
}
