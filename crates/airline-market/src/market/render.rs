use super::report::{
    insights_to_markdown, BusinessOpportunitiesReport, MarketOverview, PriceTrendReport,
    RouteReport,
};
use std::io::{self, Write};

/// Presentation capability for generated reports. Generation never depends on
/// it, so reports can be produced and tested headlessly.
pub trait Renderer {
    fn route(&mut self, report: &RouteReport) -> io::Result<()>;
    fn price_trend(&mut self, report: &PriceTrendReport) -> io::Result<()>;
    fn market_overview(&mut self, overview: &MarketOverview) -> io::Result<()>;
    fn business_opportunities(&mut self, report: &BusinessOpportunitiesReport) -> io::Result<()>;
    fn analysis(&mut self, title: &str, text: &str) -> io::Result<()>;
}

/// Plain-text renderer used by the command line.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn route(&mut self, report: &RouteReport) -> io::Result<()> {
        let snapshot = &report.snapshot;
        writeln!(self.out, "Route analysis: {}", snapshot.route())?;
        writeln!(self.out, "Travel date: {}", snapshot.date())?;
        writeln!(
            self.out,
            "Average price ${:.0} | {} flights | demand {} | range ${} - ${}",
            snapshot.avg_price(),
            snapshot.total_flights(),
            snapshot.demand_level().label(),
            snapshot.min_price(),
            snapshot.max_price()
        )?;

        writeln!(self.out, "\nAvailable flights")?;
        for flight in snapshot.flights() {
            writeln!(
                self.out,
                "- {} | ${} | departs {} | {} | {} | {}",
                flight.airline.label(),
                flight.price,
                flight.departure_time,
                flight.duration_label(),
                flight.aircraft.label(),
                flight.availability.label()
            )?;
        }

        writeln!(self.out, "\nMarket insights")?;
        writeln!(self.out, "{}", insights_to_markdown(&report.insights))
    }

    fn price_trend(&mut self, report: &PriceTrendReport) -> io::Result<()> {
        writeln!(
            self.out,
            "Price trends over the last {} days ({} -> {}, {} points)",
            report.days,
            report.start,
            report.end,
            report.points.len()
        )?;

        writeln!(self.out, "\nMost expensive routes")?;
        for route in &report.summary.most_expensive {
            if let Some(stats) = report.summary.stats_for(*route) {
                writeln!(self.out, "- {}: ${:.0}", route.label(), stats.mean_price)?;
            }
        }

        writeln!(self.out, "\nMost volatile routes")?;
        for route in &report.summary.most_volatile {
            if let Some(stats) = report.summary.stats_for(*route) {
                writeln!(self.out, "- {}: ±${:.0}", route.label(), stats.volatility)?;
            }
        }
        Ok(())
    }

    fn market_overview(&mut self, overview: &MarketOverview) -> io::Result<()> {
        writeln!(self.out, "Market overview")?;
        writeln!(
            self.out,
            "- {} weekly searches | {} bookings | {:.1}% average conversion",
            overview.total_weekly_searches, overview.total_bookings, overview.avg_conversion_rate
        )?;

        writeln!(self.out, "\nTop routes by weekly searches")?;
        for route in &overview.top_routes {
            writeln!(
                self.out,
                "- {}: {} searches, {} bookings, ${} avg, {} ({} peak)",
                route.route,
                route.weekly_searches,
                route.bookings,
                route.avg_price,
                route.demand_trend.label(),
                route.peak_season.label()
            )?;
        }

        writeln!(self.out, "\nDemand trends")?;
        for count in &overview.demand_trends {
            writeln!(self.out, "- {}: {} routes", count.trend_label, count.routes)?;
        }
        Ok(())
    }

    fn business_opportunities(&mut self, report: &BusinessOpportunitiesReport) -> io::Result<()> {
        writeln!(self.out, "Business insights for hostel operators")?;

        if report.opportunities.is_empty() {
            writeln!(self.out, "\nHigh-value routes: none this cycle")?;
        } else {
            writeln!(self.out, "\nHigh-value routes")?;
            for opportunity in &report.opportunities {
                writeln!(
                    self.out,
                    "- {}: {} searches | ${} avg | {}",
                    opportunity.route,
                    opportunity.searches,
                    opportunity.price,
                    opportunity.trend.label()
                )?;
            }
        }

        for strategy in &report.seasonal_strategies {
            writeln!(
                self.out,
                "\n{} strategy ({})",
                strategy.season, strategy.months
            )?;
            for action in &strategy.actions {
                writeln!(self.out, "- {action}")?;
            }
        }

        writeln!(self.out, "\nRevenue optimization tips")?;
        for tip in &report.revenue_tips {
            writeln!(self.out, "- {}: {}", tip.topic, tip.detail)?;
        }
        Ok(())
    }

    fn analysis(&mut self, title: &str, text: &str) -> io::Result<()> {
        writeln!(self.out, "\n{title}")?;
        writeln!(self.out, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{City, MarketSimulator};
    use chrono::NaiveDate;

    fn render_to_string(render: impl FnOnce(&mut TextRenderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        render(&mut renderer).expect("render succeeds");
        String::from_utf8(renderer.into_inner()).expect("utf8 output")
    }

    #[test]
    fn route_output_lists_every_flight_and_insight() {
        let mut simulator = MarketSimulator::seeded(21);
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date");
        let report = RouteReport::generate(&mut simulator, City::Brisbane, City::Darwin, date)
            .expect("valid route");

        let text = render_to_string(|renderer| renderer.route(&report));
        assert!(text.starts_with("Route analysis: Brisbane → Darwin"));
        let flight_lines = text.lines().filter(|line| line.contains("| departs ")).count();
        assert_eq!(flight_lines, report.snapshot.total_flights());
        assert_eq!(
            text.lines().filter(|line| line.starts_with("- **")).count(),
            report.insights.len()
        );
    }

    #[test]
    fn opportunities_output_handles_empty_list() {
        let report = BusinessOpportunitiesReport {
            opportunities: Vec::new(),
            seasonal_strategies: crate::market::report::seasonal_strategies(),
            revenue_tips: crate::market::report::revenue_tips(),
        };

        let text = render_to_string(|renderer| renderer.business_opportunities(&report));
        assert!(text.contains("High-value routes: none this cycle"));
        assert!(text.contains("Summer strategy (Dec-Feb)"));
        assert!(text.contains("- Dynamic Pricing: "));
    }
}
