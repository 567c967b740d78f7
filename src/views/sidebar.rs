use maud::{html, Markup};

use super::Tab;
use crate::filter::{FilterOptions, FilterState};

const STATIONS: [(&str, &str); 5] = [
    ("DKI1", "Bunderan HI"),
    ("DKI2", "Kelapa Gading"),
    ("DKI3", "Jagakarsa"),
    ("DKI4", "Lubang Buaya"),
    ("DKI5", "Kebon Jeruk"),
];

// ---

/// Select widget; changing it resubmits the filter form.
fn selector(name: &str, label: &str, options: &[String], current: &str) -> Markup {
    // ---
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) onchange="this.form.submit()" {
            @for option in options {
                option value=(option) selected[option == current] { (option) }
            }
        }
    }
}

pub(super) fn sidebar(state: &FilterState, options: &FilterOptions, active: Tab) -> Markup {
    // ---
    html! {
        aside class="sidebar" {
            div style="padding: 12px; border-bottom: 1px solid #e0e0e0; margin-bottom: 12px;" {
                div style="display: flex; align-items: center; gap: 10px;" {
                    i class="ri-windy-line" style="font-size: 28px; color: #1976D2;" {}
                    div {
                        div style="font-size: 15px; font-weight: 600;" { "ISPU Monitor" }
                        div style="font-size: 11px; color: #666;" { "Jakarta Air Quality" }
                    }
                }
            }
            strong { "Filter Data" }
            form method="get" action="/" {
                input type="hidden" name="tab" value=(active.slug());
                (selector("year", "Pilih Tahun", &options.years, &state.year.to_string()))
                (selector("station", "Pilih Stasiun", &options.stations, &state.station.to_string()))
                (selector("category", "Kategori Kualitas Udara", &options.categories, &state.category.to_string()))
                noscript { button type="submit" { "Terapkan" } }
            }
            div style="margin-top: 15px; padding: 10px; background: #f5f5f5; border-left: 3px solid #2196F3;" {
                div style="font-size: 12px; font-weight: 600; margin-bottom: 6px;" {
                    i class="ri-information-line" {} " Tentang"
                }
                div style="font-size: 11px; line-height: 1.5; color: #666;" {
                    "Data kualitas udara Jakarta 2010-2025 dari 5 stasiun:"
                    @for (code, place) in STATIONS {
                        br;
                        i class="ri-map-pin-line" {} " " (code) " (" (place) ")"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::filter::Selection;

    #[test]
    fn test_current_selection_is_marked() {
        // ---
        let options = FilterOptions {
            years: vec!["Semua".into(), "2020".into(), "2021".into()],
            stations: vec!["Semua".into(), "DKI1".into()],
            categories: vec!["Semua".into(), "BAIK".into()],
        };
        let state = FilterState {
            year: Selection::Only(2021),
            ..FilterState::default()
        };
        let html = sidebar(&state, &options, Tab::Stations).into_string();

        assert!(html.contains(r#"<option value="2021" selected>2021</option>"#));
        assert!(html.contains(r#"<option value="Semua" selected>Semua</option>"#));
        assert!(html.contains(r#"name="tab" value="stasiun""#));
        assert!(html.contains("Kebon Jeruk"));
    }
}
