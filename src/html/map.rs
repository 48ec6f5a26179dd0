use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{script_literal, title_case};
use crate::campus::Campus;

/// Deepest zoom level the OpenStreetMap tile layer serves
pub const MAX_MAP_ZOOM: u8 = 19;

/// A rendered map page together with the route it highlights
#[derive(Debug, Clone)]
pub struct RouteMap {
    pub path: Vec<String>,
    pub html: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct Marker {
    lat: f64,
    lon: f64,
    label: String,
}

const MAP_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="generated-at" content="__GENERATED_AT__" />
  <title>Campus Route</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" crossorigin="" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" crossorigin=""></script>
  <style>
    html, body { height: 100%; margin: 0; }
    #campus-map { position: absolute; inset: 0; }
  </style>
</head>
<body>
  <div id="campus-map"></div>
  <script>
    const center = __CENTER__;
    const markers = __MARKERS__;
    const route = __ROUTE__;

    const map = L.map("campus-map").setView(center, __ZOOM__);
    L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
      maxZoom: __MAX_ZOOM__,
      attribution: "&copy; OpenStreetMap contributors",
    }).addTo(map);

    for (const m of markers) {
      const label = () => {
        const span = document.createElement("span");
        span.textContent = m.label;
        return span;
      };
      L.marker([m.lat, m.lon]).bindPopup(label()).bindTooltip(label()).addTo(map);
    }

    if (route.length > 0) {
      L.polyline(route, { color: "red", weight: 5, opacity: 0.8 }).addTo(map);
    }
  </script>
</body>
</html>
"#;

/// Render a Leaflet page with every campus place and the given route
///
/// The view is centred on the first place of `path`, or on the first campus
/// place when `path` is empty. Route names must exist in `campus`.
pub fn render(campus: &Campus, path: &[String], zoom: u8) -> Result<RouteMap> {
    let route: Vec<[f64; 2]> = path
        .iter()
        .map(|name| {
            campus
                .place(name)
                .map(|p| [p.lat, p.lon])
                .with_context(|| format!("Route references unknown place '{}'", name))
        })
        .collect::<Result<_>>()?;

    let center = match route.first() {
        Some(first) => *first,
        None => {
            let first = campus
                .places()
                .first()
                .context("Cannot render a map for an empty campus")?;
            [first.lat, first.lon]
        }
    };

    let markers: Vec<Marker> = campus
        .places()
        .iter()
        .map(|p| Marker {
            lat: p.lat,
            lon: p.lon,
            label: title_case(&p.name),
        })
        .collect();

    let generated_at = Utc::now();
    let html = MAP_TEMPLATE
        .replace("__GENERATED_AT__", &generated_at.to_rfc3339())
        .replace("__CENTER__", &script_literal(&center).context("Failed to encode map center")?)
        .replace("__MARKERS__", &script_literal(&markers).context("Failed to encode markers")?)
        .replace("__ROUTE__", &script_literal(&route).context("Failed to encode route")?)
        .replace("__MAX_ZOOM__", &MAX_MAP_ZOOM.to_string())
        .replace("__ZOOM__", &zoom.min(MAX_MAP_ZOOM).to_string());

    Ok(RouteMap {
        path: path.to_vec(),
        html,
        generated_at,
    })
}
