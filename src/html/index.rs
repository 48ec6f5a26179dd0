use super::escape;
use crate::client::{FAILURE_PREFIX, IN_PROGRESS, PATH_SEPARATOR, SUCCESS_PREFIX};
use crate::routes;

const INDEX_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Campus Navigation</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem; }
    form { display: flex; gap: 0.5rem; flex-wrap: wrap; align-items: center; }
    input { padding: 0.4rem; min-width: 12rem; }
    #result { margin: 1rem 0; font-size: 1.1rem; min-height: 1.5rem; }
    #map { width: 100%; height: 70vh; border: 1px solid #ccc; }
  </style>
</head>
<body>
  <h1>Campus Navigation</h1>
  <form id="nav-form">
    <input id="start" list="locations" placeholder="Start location" autocomplete="off" />
    <input id="end" list="locations" placeholder="Destination" autocomplete="off" />
    <button type="submit">Navigate</button>
  </form>
  <datalist id="locations">
__OPTIONS__  </datalist>
  <div id="result"></div>
  <iframe id="map" title="Route map" src="__MAP_PATH__"></iframe>
  <script>
    const page = {
      start: document.getElementById("start"),
      end: document.getElementById("end"),
      result: document.getElementById("result"),
      map: document.getElementById("map"),
    };
    for (const [name, el] of Object.entries(page)) {
      if (!el) throw new Error("missing page element: " + name);
    }

    async function navigate() {
      page.result.innerText = __IN_PROGRESS__;
      try {
        const res = await fetch(__NAVIGATE_PATH__, {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify({ start: page.start.value, end: page.end.value }),
        });
        const data = await res.json();
        if (data.error != null) {
          page.result.innerText = __FAILURE__ + data.error;
          return;
        }
        page.result.innerText = __SUCCESS__ + data.path.join(__SEPARATOR__);
        page.map.src = data.map;
      } catch (err) {
        page.result.innerText = __FAILURE__ + err.message;
      }
    }

    document.getElementById("nav-form").addEventListener("submit", (event) => {
      event.preventDefault();
      navigate();
    });
  </script>
</body>
</html>
"#;

fn js_string(value: &str) -> String {
    // A JSON string is a valid JS string literal.
    super::script_literal(&value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Render the navigation page with the given location suggestions
pub fn render(locations: &[String]) -> String {
    let options: String = locations
        .iter()
        .map(|name| format!("    <option value=\"{}\"></option>\n", escape(name)))
        .collect();

    INDEX_TEMPLATE
        .replace("__OPTIONS__", &options)
        .replace("__MAP_PATH__", routes::MAP)
        .replace("__NAVIGATE_PATH__", &js_string(routes::NAVIGATE))
        .replace("__IN_PROGRESS__", &js_string(IN_PROGRESS))
        .replace("__FAILURE__", &js_string(FAILURE_PREFIX))
        .replace("__SUCCESS__", &js_string(SUCCESS_PREFIX))
        .replace("__SEPARATOR__", &js_string(PATH_SEPARATOR))
}
