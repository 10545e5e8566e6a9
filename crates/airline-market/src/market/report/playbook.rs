use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalStrategy {
    pub season: &'static str,
    pub months: &'static str,
    pub actions: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueTip {
    pub topic: &'static str,
    pub detail: &'static str,
}

pub fn seasonal_strategies() -> Vec<SeasonalStrategy> {
    vec![
        SeasonalStrategy {
            season: "Summer",
            months: "Dec-Feb",
            actions: vec![
                "Focus on Gold Coast and Cairns routes",
                "Expect 20-30% higher demand",
                "Premium pricing opportunities",
                "Book marketing campaigns early",
            ],
        },
        SeasonalStrategy {
            season: "Winter",
            months: "Jun-Aug",
            actions: vec![
                "Target business travel routes",
                "Sydney-Melbourne peak demand",
                "Corporate partnership opportunities",
                "Stable pricing patterns",
            ],
        },
    ]
}

pub fn revenue_tips() -> Vec<RevenueTip> {
    vec![
        RevenueTip {
            topic: "Peak Booking Windows",
            detail: "Target customers 2-3 weeks before high-demand flights",
        },
        RevenueTip {
            topic: "Dynamic Pricing",
            detail: "Adjust hostel rates based on flight demand patterns",
        },
        RevenueTip {
            topic: "Location Strategy",
            detail: "Focus on cities with consistently high flight volumes",
        },
        RevenueTip {
            topic: "Partnership Opportunities",
            detail: "Connect with airlines for package deals",
        },
        RevenueTip {
            topic: "Seasonal Adjustments",
            detail: "Increase capacity during peak travel seasons",
        },
    ]
}
