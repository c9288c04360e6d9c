//! Interactive Map Page
//!
//! Markers come from `/api/v1/locations`; clicks on the map are posted to
//! `/click` and the answer shown in a popup.

use maud::{html, Markup, PreEscaped, DOCTYPE};

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CLUSTER_CSS_URLS: [&str; 2] = [
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css",
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css",
];
const CLUSTER_JS_URL: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";

/// Initial map view: centre (lat, lon) and zoom level.
pub const MAP_CENTER: (f64, f64) = (20.0, 0.0);
pub const MAP_ZOOM: u8 = 2;

/// Render the map page.
pub fn render() -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "World Wines" }
                link rel="stylesheet" href=(LEAFLET_CSS_URL);
                @for url in CLUSTER_CSS_URLS {
                    link rel="stylesheet" href=(url);
                }
                style { "html, body, #map { height: 100%; margin: 0; }" }
            }
            body {
                div id="map" {}
                (map_scripts())
            }
        }
    }
}

fn map_scripts() -> Markup {
    let center = format!("[{},{}]", MAP_CENTER.0, MAP_CENTER.1);

    html! {
        script src=(LEAFLET_JS_URL) {}
        script src=(CLUSTER_JS_URL) {}
        script {
            (format!("window.WINEMAP_CENTER={};window.WINEMAP_ZOOM={};", center, MAP_ZOOM))
        }
        script { (PreEscaped(MAP_JS)) }
    }
}

// Clicks on a repeated world copy are wrapped before posting.
const MAP_JS: &str = r#"
const map = L.map('map').setView(window.WINEMAP_CENTER, window.WINEMAP_ZOOM);
L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
  attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);

function addMarker(layer, m) {
  L.marker([m.latitude, m.longitude])
    .bindPopup(m.popup)
    .bindTooltip(m.tooltip)
    .addTo(layer);
}

fetch('/api/v1/locations')
  .then(r => r.json())
  .then(data => {
    data.countries.forEach(m => addMarker(map, m));
    const cluster = L.markerClusterGroup();
    data.regions.forEach(m => addMarker(cluster, m));
    map.addLayer(cluster);
  });

map.on('click', e => {
  const at = e.latlng.wrap();
  fetch('/click', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ latitude: at.lat, longitude: at.lng })
  })
    .then(r => r.json())
    .then(res => {
      const popup = L.popup().setLatLng(e.latlng);
      const content = document.createElement('div');
      if (res.error) {
        content.textContent = res.error;
      } else {
        const title = document.createElement('b');
        title.textContent = res.type + ': ' + res.name;
        const info = document.createElement('p');
        info.textContent = res.info;
        content.append(title, info);
      }
      popup.setContent(content).openOn(map);
    });
});
"#;
