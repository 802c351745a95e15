//! Status and classification enums for the platform's entities.
//!
//! Lifecycle enums ([`ReportStatus`], [`OrderStatus`], [`QueryStatus`]) carry
//! their own transition rules so every caller agrees on which moves are legal.

use serde::{Deserialize, Serialize};

/// Implements `Display`/`FromStr` over the snake_case wire names.
macro_rules! wire_names {
    ($ty:ident, $label:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// The snake_case name used in storage and on the command line.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("invalid ", $label, ": {}"), s)),
                }
            }
        }
    };
}

/// Role of a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Waste Warrior: reports waste and takes training.
    #[default]
    Citizen,
    /// Field worker cleaning verified sites.
    Worker,
    /// Green Champion: verifies reports and runs fulfillment.
    Admin,
}

wire_names!(UserRole, "user role", {
    Citizen => "citizen",
    Worker => "worker",
    Admin => "admin",
});

/// Severity of a reported waste site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

wire_names!(Severity, "severity", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Waste report lifecycle: `pending -> verified -> cleaned`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    Verified,
    Cleaned,
}

wire_names!(ReportStatus, "report status", {
    Pending => "pending",
    Verified => "verified",
    Cleaned => "cleaned",
});

impl ReportStatus {
    /// The single state that may follow this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Verified),
            Self::Verified => Some(Self::Cleaned),
            Self::Cleaned => None,
        }
    }

    /// Reports move one step forward at a time; they never regress or skip.
    #[must_use]
    pub fn can_transition_to(self, to: Self) -> bool {
        self.next() == Some(to)
    }
}

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    InTransit,
    Delivered,
    Cancelled,
}

wire_names!(OrderStatus, "order status", {
    Processing => "processing",
    Shipped => "shipped",
    InTransit => "in_transit",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

impl OrderStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 5] = [
        Self::Processing,
        Self::Shipped,
        Self::InTransit,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Delivered and cancelled orders accept no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Fulfillment moves `processing -> shipped -> in_transit -> delivered`;
    /// any non-terminal order may be cancelled.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Processing, Self::Shipped)
                | (Self::Shipped, Self::InTransit)
                | (Self::InTransit, Self::Delivered)
                | (Self::Processing | Self::Shipped | Self::InTransit, Self::Cancelled)
        )
    }

    /// Statuses an admin may move this order to next.
    #[must_use]
    pub fn next_actions(self) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|to| self.can_transition_to(*to))
            .collect()
    }

    /// Customer-facing label shown on the tracking page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Processing => "Order Received",
            Self::Shipped => "Shipped",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Support ticket status: `open -> closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    #[default]
    Open,
    Closed,
}

wire_names!(QueryStatus, "query status", {
    Open => "open",
    Closed => "closed",
});

/// Kind of training material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    Video,
    Article,
    Quiz,
}

wire_names!(ModuleType, "module type", {
    Video => "video",
    Article => "article",
    Quiz => "quiz",
});

/// Marketplace product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Dustbin,
    Compost,
    Bags,
    Accessories,
}

wire_names!(ProductCategory, "product category", {
    Dustbin => "dustbin",
    Compost => "compost",
    Bags => "bags",
    Accessories => "accessories",
});

/// Kind of waste processing facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    Biomethanization,
    Recycling,
    Scrap,
}

wire_names!(FacilityType, "facility type", {
    Biomethanization => "biomethanization",
    Recycling => "recycling",
    Scrap => "scrap",
});

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_report_status_forward_only() {
        assert!(ReportStatus::Pending.can_transition_to(ReportStatus::Verified));
        assert!(ReportStatus::Verified.can_transition_to(ReportStatus::Cleaned));

        // no skipping
        assert!(!ReportStatus::Pending.can_transition_to(ReportStatus::Cleaned));
        // no regressing
        assert!(!ReportStatus::Cleaned.can_transition_to(ReportStatus::Verified));
        assert!(!ReportStatus::Verified.can_transition_to(ReportStatus::Pending));
        assert!(!ReportStatus::Pending.can_transition_to(ReportStatus::Pending));
    }

    #[test]
    fn test_report_status_ordering() {
        assert!(ReportStatus::Pending < ReportStatus::Verified);
        assert!(ReportStatus::Verified < ReportStatus::Cleaned);
    }

    #[test]
    fn test_order_status_graph() {
        use OrderStatus::*;

        let valid = [
            (Processing, Shipped),
            (Shipped, InTransit),
            (InTransit, Delivered),
            (Processing, Cancelled),
            (Shipped, Cancelled),
            (InTransit, Cancelled),
        ];
        for (from, to) in valid {
            assert!(from.can_transition_to(to), "{from} -> {to} should be valid");
        }

        let invalid = [
            (Processing, InTransit),
            (Processing, Delivered),
            (Shipped, Processing),
            (Delivered, Cancelled),
            (Cancelled, Processing),
            (Delivered, Shipped),
        ];
        for (from, to) in invalid {
            assert!(!from.can_transition_to(to), "{from} -> {to} should be invalid");
        }
    }

    #[test]
    fn test_order_next_actions() {
        assert_eq!(
            OrderStatus::Processing.next_actions(),
            vec![OrderStatus::Shipped, OrderStatus::Cancelled]
        );
        assert_eq!(
            OrderStatus::InTransit.next_actions(),
            vec![OrderStatus::Delivered, OrderStatus::Cancelled]
        );
        assert!(OrderStatus::Delivered.next_actions().is_empty());
        assert!(OrderStatus::Cancelled.next_actions().is_empty());
    }

    #[test]
    fn test_wire_names_roundtrip() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert_eq!(
            serde_json::to_string(&OrderStatus::InTransit).unwrap(),
            "\"in_transit\""
        );
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("superuser".parse::<UserRole>().is_err());
    }
}
