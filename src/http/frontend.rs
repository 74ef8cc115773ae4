//! Embedded HTML/CSS/JS front-end for the dashboard.
//!
//! The whole page is compiled into the binary as a string constant; the only
//! external asset is the Plotly script. The page holds the selection state,
//! posts every control change to `/v1/dashboard/update`, and applies the
//! returned replacement effects. Charts are always fully replaced, never
//! patched in place.

/// The complete single-page dashboard HTML.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>SpaceX Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
<style>
:root {
  --bg: #f6f7f9;
  --surface: #ffffff;
  --border: #d0d7de;
  --text: #1f2328;
  --heading: #503d36;
  --font: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
}

* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font);
  font-size: 14px;
  line-height: 1.5;
}

.app { max-width: 1100px; margin: 0 auto; padding: 24px; }

h1 {
  text-align: center;
  color: var(--heading);
  font-size: 40px;
  margin-bottom: 24px;
}

.panel {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 16px;
  margin-bottom: 24px;
}

select {
  width: 100%;
  padding: 8px;
  font-size: 14px;
  border: 1px solid var(--border);
  border-radius: 6px;
}

.slider-row { display: flex; align-items: center; gap: 12px; }
.slider-row input[type="range"] { flex: 1; }
.slider-marks {
  display: flex;
  justify-content: space-between;
  color: #656d76;
  font-size: 12px;
}

.chart { min-height: 420px; }
.error { color: #d1242f; padding: 8px 0; }
</style>
</head>
<body>
<div class="app">
  <h1>SpaceX Launch Records Dashboard</h1>

  <div class="panel">
    <label for="site-dropdown">Launch Site:</label>
    <select id="site-dropdown"></select>
  </div>

  <div class="panel">
    <div id="success-pie-chart" class="chart"></div>
    <div id="pie-error" class="error"></div>
  </div>

  <div class="panel">
    <p>Payload range (Kg):</p>
    <div class="slider-row">
      <input type="range" id="payload-lo">
      <input type="range" id="payload-hi">
    </div>
    <div class="slider-marks"><span>0</span><span>10,000</span></div>
  </div>

  <div class="panel">
    <div id="success-payload-scatter-chart" class="chart"></div>
    <div id="scatter-error" class="error"></div>
  </div>
</div>

<script>
// Selection state: owned here, mutated only by direct user interaction.
let state = null;

function renderPie(chart) {
  Plotly.react('success-pie-chart', [{
    type: 'pie',
    values: chart.slices.map(s => s.value),
    labels: chart.slices.map(s => s.label),
  }], { title: { text: chart.title } });
}

function renderScatter(chart) {
  // One trace per booster category so points are colored by category.
  const byCategory = new Map();
  for (const p of chart.points) {
    if (!byCategory.has(p.booster_category)) byCategory.set(p.booster_category, []);
    byCategory.get(p.booster_category).push(p);
  }
  const traces = [...byCategory.entries()].map(([category, points]) => ({
    type: 'scatter',
    mode: 'markers',
    name: category,
    x: points.map(p => p.payload_mass_kg),
    y: points.map(p => p.outcome),
  }));
  Plotly.react('success-payload-scatter-chart', traces, {
    title: { text: chart.title },
    xaxis: { title: { text: 'Payload Mass (kg)' } },
    yaxis: { title: { text: 'Launch Outcome' }, tickvals: [0, 1] },
  });
}

function applyEffects(effects) {
  for (const effect of effects) {
    if (effect.ReplacePieChart) renderPie(effect.ReplacePieChart);
    if (effect.ReplaceScatterChart) renderScatter(effect.ReplaceScatterChart);
  }
}

async function dispatch(event, errorId) {
  const errorEl = document.getElementById(errorId);
  errorEl.textContent = '';
  const resp = await fetch('/v1/dashboard/update', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ state, event }),
  });
  if (!resp.ok) {
    // Failed update: state is unchanged, the affected chart keeps its
    // previous content.
    const err = await resp.json();
    errorEl.textContent = err.message || 'update failed';
    return;
  }
  const update = await resp.json();
  state = update.state;
  applyEffects(update.effects);
}

function currentRange() {
  const lo = Number(document.getElementById('payload-lo').value);
  const hi = Number(document.getElementById('payload-hi').value);
  return { lo: Math.min(lo, hi), hi: Math.max(lo, hi) };
}

async function init() {
  const view = await (await fetch('/v1/dashboard')).json();

  const dropdown = document.getElementById('site-dropdown');
  for (const option of view.site_options) {
    const el = document.createElement('option');
    el.value = option.value;
    el.textContent = option.label;
    dropdown.appendChild(el);
  }

  const slider = view.payload_slider;
  for (const [id, value] of [['payload-lo', slider.value[0]], ['payload-hi', slider.value[1]]]) {
    const el = document.getElementById(id);
    el.min = slider.min;
    el.max = slider.max;
    el.step = slider.step;
    el.value = value;
  }

  state = {
    site: 'ALL',
    payload_range: { lo: slider.value[0], hi: slider.value[1] },
  };

  dropdown.addEventListener('change', () =>
    dispatch({ SiteSelected: dropdown.value }, 'pie-error'));
  for (const id of ['payload-lo', 'payload-hi']) {
    document.getElementById(id).addEventListener('change', () =>
      dispatch({ PayloadRangeChanged: currentRange() }, 'scatter-error'));
  }

  // Initial render: both charts under the default state.
  const [pie, scatter] = await Promise.all([
    fetch('/v1/charts/launch-outcomes').then(r => r.json()),
    fetch('/v1/charts/payload-outcomes').then(r => r.json()),
  ]);
  renderPie(pie);
  renderScatter(scatter);
}

init();
</script>
</body>
</html>
"##;
