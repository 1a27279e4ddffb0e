//! Text rendering of itineraries.

use std::fmt;

use crate::domain::Itinerary;

/// Render itineraries as the classic plain-text plan.
///
/// Output shape, with one `Route` block per itinerary:
///
/// ```text
///
/// Route 1:
/// Teilroute 1:
/// Dauer: 5 Minuten
/// Verkehrsmittel: U-Bahn, Name: U1, Kurzname: U1, Symbol: U1, Ziel: Leopoldau
/// Punkt: Karlsplatz, StopID: 60200815, Platform: 2, Zeit: 08:00
/// ---
/// ```
///
/// `Route` and `Teilroute` numbers are 1-based display positions. Absent
/// durations, point fields and times render as `N/A`; an empty plan
/// renders as the empty string.
pub fn format_plan(itineraries: &[Itinerary]) -> String {
    PlanView(itineraries).to_string()
}

struct PlanView<'a>(&'a [Itinerary]);

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, itinerary) in self.0.iter().enumerate() {
            write!(f, "\nRoute {}:\n", n + 1)?;

            for (i, segment) in itinerary.segments.iter().enumerate() {
                writeln!(f, "Teilroute {}:", i + 1)?;
                match segment.duration_minutes {
                    Some(minutes) => writeln!(f, "Dauer: {} Minuten", minutes)?,
                    None => writeln!(f, "Dauer: N/A")?,
                }

                for leg in &segment.legs {
                    writeln!(
                        f,
                        "Verkehrsmittel: {}, Name: {}, Kurzname: {}, Symbol: {}, Ziel: {}",
                        leg.mode, leg.name, leg.short_name, leg.symbol, leg.destination
                    )?;
                }

                for point in &segment.points {
                    let zeit = match point.time {
                        Some(t) => t.to_string(),
                        None => "N/A".to_string(),
                    };
                    writeln!(
                        f,
                        "Punkt: {}, StopID: {}, Platform: {}, Zeit: {}",
                        or_na(&point.name),
                        or_na(&point.stop_id),
                        or_na(&point.platform),
                        zeit
                    )?;
                }
            }

            writeln!(f, "---")?;
        }

        Ok(())
    }
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}
