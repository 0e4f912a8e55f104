use super::state::Slot;
use crate::sdk::model::LatLng;

/// Smallest box containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn around(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    pub fn contains(&self, p: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&p.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&p.lng)
    }
}

/// The basemap the search screen draws on.
pub trait MapSurface {
    fn init(&mut self, center: LatLng, zoom: u8);
    fn set_view(&mut self, center: LatLng, zoom: u8);
    fn show_marker(&mut self, slot: Slot, position: LatLng, color: &str);
    fn draw_line(&mut self, from: LatLng, to: LatLng, color: &str);
    fn remove_line(&mut self);
    fn fit_bounds(&mut self, bounds: Bounds, padding_px: u32);
    fn init_journey_map(&mut self, center: LatLng, zoom: u8);
}

/// Map surface that only logs what it would draw.
#[derive(Debug, Default)]
pub struct LogMap;

impl MapSurface for LogMap {
    fn init(&mut self, center: LatLng, zoom: u8) {
        log::info!("[MAP] init at {:?} zoom {}", center, zoom);
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        log::info!("[MAP] view {:?} zoom {}", center, zoom);
    }

    fn show_marker(&mut self, slot: Slot, position: LatLng, color: &str) {
        log::info!("[MAP] {:?} marker ({}) at {:?}", slot, color, position);
    }

    fn draw_line(&mut self, from: LatLng, to: LatLng, color: &str) {
        log::info!("[MAP] line ({}) {:?} -> {:?}", color, from, to);
    }

    fn remove_line(&mut self) {
        log::info!("[MAP] line removed");
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding_px: u32) {
        log::info!("[MAP] fit {:?} padding {}px", bounds, padding_px);
    }

    fn init_journey_map(&mut self, center: LatLng, zoom: u8) {
        log::info!("[MAP] journey map at {:?} zoom {}", center, zoom);
    }
}
