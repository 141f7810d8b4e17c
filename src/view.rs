use crate::arrival::ArrivalRecord;
use crate::facility::{Facility, FacilityStatus};
use crate::registry::Registry;
use crate::time::Timestamp;
use colored::Colorize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FacilityRow {
    #[tabled(rename = "Facility")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Aircraft")]
    aircraft: String,
    #[tabled(rename = "Since")]
    since: String,
    #[tabled(rename = "Minutes")]
    minutes: String,
}

impl FacilityRow {
    fn new(registry: &Registry, facility: &Facility, now: Timestamp) -> Self {
        let status = match facility.status() {
            FacilityStatus::Available => facility.status().to_string().green(),
            FacilityStatus::Occupied => facility.status().to_string().red(),
        };
        FacilityRow {
            name: facility.name.to_string(),
            status: status.to_string(),
            aircraft: facility.occupant().map_or_else(|| "-".to_string(), |id| id.to_string()),
            since: facility
                .occupied_since()
                .map_or_else(|| "-".to_string(), |t| t.to_string()),
            // "-" and "0" mean different things
            minutes: registry
                .minutes_occupied_at(&facility.name, now)
                .map_or_else(|| "-".to_string(), |m| m.to_string()),
        }
    }
}

fn render<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn facility_table(registry: &Registry, now: Timestamp) -> String {
    render(
        registry
            .facilities()
            .map(|f| FacilityRow::new(registry, f, now))
            .collect::<Vec<_>>(),
    )
}

pub fn arrivals_table<'a>(arrivals: impl IntoIterator<Item = &'a ArrivalRecord>) -> String {
    render(arrivals)
}
