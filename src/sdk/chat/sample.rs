use crate::sdk::model::RouteOption;

fn sample(bus_name: &str, duration: &str, departure_in: &str, fare: &str) -> RouteOption {
    RouteOption {
        bus_name: bus_name.to_string(),
        fare: fare.to_string(),
        arrival: String::new(),
        duration: duration.to_string(),
        departure_in: departure_in.to_string(),
        plan: Vec::new(),
        next_buses: Vec::new(),
        transfers: None,
        walking_distance: None,
    }
}

/// Canned results the chat shows when no backend is consulted.
pub fn sample_routes() -> Vec<RouteOption> {
    vec![
        sample("Bus 42A - City Express", "32 mins", "5", "₹15"),
        sample("Bus 101B - Fast Line", "47 mins", "12", "₹22"),
        sample("Bus 77C - Night Rider", "55 mins", "20", "₹18"),
        sample("Bus 12D - Rapid Metro", "29 mins", "2", "₹20"),
    ]
}
