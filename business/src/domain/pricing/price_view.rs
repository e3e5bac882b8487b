use chrono::{Datelike, Timelike};

use crate::domain::product::card::sizes_text;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::Money;

use super::live_window::{LiveWindowState, live_window_state};

pub const BID_LABEL: &str = "PUJA:";
pub const RESERVED_BID_LABEL: &str = "PUJA (APARTADO):";
pub const RESERVED_BADGE: &str = "APARTADO";

/// Which price a card shows while the live window is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosedWindowPrice {
    #[default]
    Local,
    Live,
}

impl std::fmt::Display for ClosedWindowPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosedWindowPrice::Local => write!(f, "local"),
            ClosedWindowPrice::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for ClosedWindowPrice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(ClosedWindowPrice::Local),
            "live" => Ok(ClosedWindowPrice::Live),
            _ => Err(format!("Invalid closed window price: {}", s)),
        }
    }
}

/// Bid details, only present while the live window is open.
#[derive(Debug, Clone, PartialEq)]
pub struct BidView {
    pub label: String,
    pub short_code: String,
    pub sizes: String,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceView {
    pub window: LiveWindowState,
    /// Main price line of the card.
    pub price: Money,
    /// Reserved items get their main price struck through.
    pub struck_through: bool,
    pub badge: Option<String>,
    pub bid: Option<BidView>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PricePresenter {
    pub closed_window_price: ClosedWindowPrice,
}

impl PricePresenter {
    pub fn new(closed_window_price: ClosedWindowPrice) -> Self {
        Self {
            closed_window_price,
        }
    }

    /// Decides which price fields a card shows at `now`.
    ///
    /// `reserved` is taken as given; the presenter never looks at the
    /// product status to derive it.
    pub fn present<T: Datelike + Timelike>(
        &self,
        product: &Product,
        now: &T,
        reserved: bool,
    ) -> PriceView {
        let window = live_window_state(now);

        let (price, bid) = match window {
            LiveWindowState::Open => {
                let label = if reserved { RESERVED_BID_LABEL } else { BID_LABEL };
                let bid = BidView {
                    label: label.to_string(),
                    short_code: product.code.short_code(),
                    sizes: sizes_text(&product.sizes),
                    price: product.live_price.clone(),
                };
                (product.local_price.clone(), Some(bid))
            }
            LiveWindowState::Closed => {
                let price = match self.closed_window_price {
                    ClosedWindowPrice::Local => product.local_price.clone(),
                    ClosedWindowPrice::Live => product.live_price.clone(),
                };
                (price, None)
            }
        };

        PriceView {
            window,
            price,
            struck_through: reserved,
            badge: reserved.then(|| RESERVED_BADGE.to_string()),
            bid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{ProductCode, ProductStatus};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::str::FromStr;

    fn product() -> Product {
        Product {
            code: ProductCode::new("J-DRES-0042"),
            description: "Vestido floreado".to_string(),
            audience_category: "DAMA".to_string(),
            type_category: "ROPA".to_string(),
            sizes: vec!["S".to_string(), "M".to_string()],
            photos: vec![],
            local_price: Money::from_str("300").unwrap(),
            live_price: Money::from_str("250").unwrap(),
            status: ProductStatus::Available,
            reserved: false,
        }
    }

    // Sunday noon and Wednesday noon.
    fn open_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn closed_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn should_show_bid_details_when_window_open() {
        let view = PricePresenter::default().present(&product(), &open_instant(), false);

        assert_eq!(view.window, LiveWindowState::Open);
        assert_eq!(view.price.to_string(), "$300.00");
        let bid = view.bid.unwrap();
        assert_eq!(bid.label, BID_LABEL);
        assert_eq!(bid.short_code, "DRES 42");
        assert_eq!(bid.sizes, "S, M");
        assert_eq!(bid.price.to_string(), "$250.00");
        assert!(!view.struck_through);
        assert!(view.badge.is_none());
    }

    #[test]
    fn should_show_only_local_price_when_window_closed() {
        let view = PricePresenter::default().present(&product(), &closed_instant(), false);

        assert_eq!(view.window, LiveWindowState::Closed);
        assert_eq!(view.price.to_string(), "$300.00");
        assert!(view.bid.is_none());
    }

    #[test]
    fn should_show_live_price_when_configured_for_closed_window() {
        let presenter = PricePresenter::new(ClosedWindowPrice::Live);

        let view = presenter.present(&product(), &closed_instant(), false);

        assert_eq!(view.price.to_string(), "$250.00");
        assert!(view.bid.is_none());
    }

    #[test]
    fn should_mark_reserved_bid_label_when_window_open() {
        let view = PricePresenter::default().present(&product(), &open_instant(), true);

        assert_eq!(view.bid.unwrap().label, RESERVED_BID_LABEL);
    }

    #[test]
    fn should_strike_price_and_show_badge_when_reserved_in_either_window() {
        let presenter = PricePresenter::default();

        for now in [open_instant(), closed_instant()] {
            let view = presenter.present(&product(), &now, true);
            assert!(view.struck_through);
            assert_eq!(view.badge.as_deref(), Some(RESERVED_BADGE));
        }
    }

    #[test]
    fn should_take_reserved_from_caller_not_product() {
        let mut held = product();
        held.reserved = true;
        held.status = ProductStatus::ReservedLive;

        let view = PricePresenter::default().present(&held, &closed_instant(), false);

        assert!(!view.struck_through);
        assert!(view.badge.is_none());
    }

    #[test]
    fn should_fall_back_to_single_size_label_in_bid() {
        let mut product = product();
        product.sizes.clear();

        let view = PricePresenter::default().present(&product, &open_instant(), false);

        assert_eq!(view.bid.unwrap().sizes, "Única");
    }

    #[test]
    fn should_parse_closed_window_price() {
        assert_eq!(
            ClosedWindowPrice::from_str("live").unwrap(),
            ClosedWindowPrice::Live
        );
        assert!(ClosedWindowPrice::from_str("both").is_err());
    }
}
