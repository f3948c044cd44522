use std::fmt;

pub const NO_LISTINGS_LINE: &str = "今日无新股信息";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockListing {
    pub name: String,
    pub code: String,
    /// Issue price as published; kept verbatim since the page may show "待定".
    pub issue_price: String,
}

impl StockListing {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        issue_price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            issue_price: issue_price.into(),
        }
    }
}

impl fmt::Display for StockListing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}（{}）- 发行价：{}",
            self.name, self.code, self.issue_price
        )
    }
}

/// Outcome of a successful listing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewListings {
    Found(Vec<StockListing>),
    /// The check completed and there is nothing listed today.
    NoneToday,
}

impl NewListings {
    pub fn from_listings(listings: Vec<StockListing>) -> Self {
        if listings.is_empty() {
            Self::NoneToday
        } else {
            Self::Found(listings)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Found(listings) => listings.len(),
            Self::NoneToday => 0,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Found(listings) => listings.iter().map(ToString::to_string).collect(),
            Self::NoneToday => vec![NO_LISTINGS_LINE.to_string()],
        }
    }
}
