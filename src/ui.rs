use crate::models::ACTIVITIES;
use crate::plan::{GOALS, MONTHLY_TARGETS, PAGE_TITLE, RIDE_DEFINITIONS, WEEKLY_PLAN};

pub fn render_index(date: &str) -> String {
    INDEX_HTML
        .replace("{{TITLE}}", &escape(PAGE_TITLE))
        .replace("{{DATE}}", date)
        .replace("{{ACTIVITY_OPTIONS}}", &activity_options())
        .replace("{{GOALS}}", &goals_section())
        .replace("{{MILEAGE_TARGETS}}", &mileage_targets_section())
        .replace("{{RIDE_DEFINITIONS}}", &ride_definitions_section())
        .replace("{{WEEKLY_PLAN}}", &weekly_plan_section())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn activity_options() -> String {
    ACTIVITIES
        .iter()
        .map(|code| format!("<option value=\"{code}\">{code}</option>"))
        .collect()
}

fn goals_section() -> String {
    GOALS
        .iter()
        .enumerate()
        .map(|(index, goal)| {
            format!(
                "<p><strong>{})</strong> {}</p>",
                index + 1,
                escape(goal)
            )
        })
        .collect()
}

fn mileage_targets_section() -> String {
    MONTHLY_TARGETS
        .iter()
        .map(|(month, target)| format!("<p><strong>{}:</strong> {}</p>", escape(month), escape(target)))
        .collect()
}

fn ride_definitions_section() -> String {
    RIDE_DEFINITIONS
        .iter()
        .map(|(name, definition)| {
            format!("<p><strong>{}:</strong> {}</p>", escape(name), escape(definition))
        })
        .collect()
}

fn weekly_plan_section() -> String {
    WEEKLY_PLAN
        .iter()
        .map(|day| {
            format!(
                concat!(
                    "<section class=\"plan-day\">",
                    "<h3>{}</h3>",
                    "<p><strong>Intensity:</strong> {}</p>",
                    "<p><strong>AM:</strong> {}</p>",
                    "<p><strong>PM:</strong> {}</p>",
                    "<p><strong>Total workout time:</strong> {}</p>",
                    "</section>"
                ),
                escape(day.day),
                escape(day.intensity),
                escape(day.morning),
                escape(day.evening),
                escape(day.duration),
            )
        })
        .collect()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f7f5;
      --bg-2: #cfe3d4;
      --ink: #23302a;
      --accent: #2d7a4b;
      --accent-2: #2f4858;
      --card: #ffffff;
      --line: rgba(47, 72, 88, 0.12);
      --shadow: 0 18px 44px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top left, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #e9f1ea 70%, #f6f9f5 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 28px 18px 48px;
    }

    .layout {
      width: min(1180px, 100%);
      margin: 0 auto;
      display: grid;
      grid-template-columns: 280px 1fr;
      gap: 24px;
      align-items: start;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.7rem, 3.2vw, 2.4rem);
      margin: 0 0 20px;
      width: min(1180px, 100%);
      margin-left: auto;
      margin-right: auto;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 22px;
    }

    .sidebar {
      display: grid;
      gap: 14px;
    }

    .sidebar h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .sidebar form {
      display: grid;
      gap: 14px;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field span {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #6f7a72;
    }

    input[type="date"],
    input[type="number"],
    select {
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 9px 10px;
      font: inherit;
      background: white;
    }

    .check {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.95rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 11px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .sidebar img {
      width: 100%;
      border-radius: 14px;
      display: block;
    }

    .tabs {
      display: inline-flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      margin-bottom: 18px;
    }

    .tab {
      background: transparent;
      color: #6b746e;
      padding: 8px 16px;
      font-size: 0.9rem;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .panel {
      display: none;
    }

    .panel.active {
      display: block;
    }

    .panel h2 {
      margin-top: 0;
    }

    .plan-day {
      border-top: 1px solid var(--line);
      padding-top: 10px;
      margin-top: 14px;
    }

    .plan-day h3 {
      margin: 0 0 6px;
    }

    .metric {
      display: inline-grid;
      gap: 6px;
      background: white;
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 16px 22px;
      margin-bottom: 18px;
    }

    .metric .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #6f7a72;
    }

    .metric .value {
      font-size: 1.8rem;
      font-weight: 600;
      color: var(--accent);
    }

    .day {
      border-top: 1px solid var(--line);
      padding: 14px 0 4px;
    }

    .day h3 {
      margin: 0 0 10px;
    }

    .day .empty {
      color: #8a938c;
      font-size: 0.95rem;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      margin-bottom: 10px;
      font-size: 0.95rem;
    }

    th, td {
      text-align: left;
      padding: 7px 10px;
      border-bottom: 1px solid var(--line);
    }

    th {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #6f7a72;
    }

    .delete-row {
      display: flex;
      align-items: center;
      gap: 10px;
      margin-bottom: 6px;
    }

    .delete-row select {
      min-width: 90px;
    }

    .delete-row button {
      background: var(--accent-2);
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .status {
      font-size: 0.92rem;
      color: #6b746e;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @media (max-width: 760px) {
      .layout {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <h1>{{TITLE}}</h1>
  <div class="layout">
    <aside class="sidebar card">
      <h2>Submit Training Activity</h2>
      <form id="entry-form" method="post" action="/entries">
        <div class="field">
          <span>Select Date</span>
          <input type="date" id="date" name="date" value="{{DATE}}" required />
        </div>
        <div class="field">
          <span>Select Activity</span>
          <select id="activity" name="activity">{{ACTIVITY_OPTIONS}}</select>
        </div>
        <div class="field">
          <span>Enter Miles</span>
          <input type="number" id="miles" name="miles" min="0" step="0.1" value="0" />
        </div>
        <label class="check">
          <input type="checkbox" id="nutrition" name="nutrition_goal_met" value="true" />
          Nutrition goal met
        </label>
        <button type="submit">Save Entry</button>
      </form>
      <div class="status" id="status"></div>
      <img src="/assets/gapco.png" alt="GAP-CO trail" />
    </aside>

    <main class="card">
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="goals" role="tab" aria-selected="true">Goals</button>
        <button class="tab" type="button" data-tab="tracker" role="tab" aria-selected="false">Training Tracker</button>
      </div>

      <section class="panel active" id="panel-goals">
        <h2>Goals</h2>
        {{GOALS}}
        <h2>Monthly Total Mileage</h2>
        {{MILEAGE_TARGETS}}
        <h2>Ride Definitions</h2>
        {{RIDE_DEFINITIONS}}
        <h2>Weekly Plan</h2>
        {{WEEKLY_PLAN}}
      </section>

      <section class="panel" id="panel-tracker">
        <h2>Weekly Training Schedule</h2>
        <div class="metric">
          <span class="label">Total Miles This Month</span>
          <span class="value" id="month-total">0</span>
        </div>
        <div id="log"></div>
      </section>
    </main>
  </div>

  <script>
    const statusEl = document.getElementById('status');
    const monthTotalEl = document.getElementById('month-total');
    const logEl = document.getElementById('log');
    const form = document.getElementById('entry-form');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const esc = (value) => String(value)
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;')
      .replace(/"/g, '&quot;');

    const formatMiles = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const renderDay = (day, slot) => {
      if (!day.entries.length) {
        return `<section class="day"><h3>${esc(day.weekday)}</h3>` +
          '<p class="empty">No data yet for this day of the week.</p></section>';
      }

      const rows = day.entries
        .map((entry) => `<tr><td>${entry.id}</td><td>${esc(entry.date)}</td>` +
          `<td>${esc(entry.activity)}</td><td>${formatMiles(entry.miles)}</td>` +
          `<td>${entry.nutrition_goal_met ? 'yes' : 'no'}</td></tr>`)
        .join('');

      const options = day.entries
        .map((entry) => `<option value="${entry.id}">${entry.id}</option>`)
        .join('');

      return `<section class="day"><h3>${esc(day.weekday)}</h3>` +
        '<table><thead><tr><th>ID</th><th>Date</th><th>Activity</th>' +
        '<th>Miles</th><th>Nutrition</th></tr></thead>' +
        `<tbody>${rows}</tbody></table>` +
        `<div class="delete-row"><select id="delete-select-${slot}">${options}</select>` +
        `<button type="button" class="delete-btn" data-slot="${slot}">Delete Entry</button></div>` +
        '</section>';
    };

    const loadLog = async () => {
      const res = await fetch('/api/log');
      if (!res.ok) {
        throw new Error('Unable to load training log');
      }
      const data = await res.json();
      monthTotalEl.textContent = formatMiles(data.month_total_miles);
      logEl.innerHTML = data.days.map(renderDay).join('');
    };

    const saveEntry = async () => {
      setStatus('Saving...', '');
      const payload = {
        date: document.getElementById('date').value,
        activity: document.getElementById('activity').value,
        miles: Number(document.getElementById('miles').value) || 0,
        nutrition_goal_met: document.getElementById('nutrition').checked
      };

      const res = await fetch('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      await loadLog();
      setStatus('Entry saved!', 'ok');
    };

    const deleteEntry = async (slot) => {
      const select = document.getElementById(`delete-select-${slot}`);
      if (!select || !select.value) {
        return;
      }

      const res = await fetch(`/api/entries/${select.value}`, { method: 'DELETE' });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Delete failed');
      }

      await loadLog();
      setStatus('Entry deleted!', 'ok');
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((tab) => {
          const isActive = tab === button;
          tab.classList.toggle('active', isActive);
          tab.setAttribute('aria-selected', String(isActive));
        });
        document.getElementById('panel-goals').classList.toggle('active', button.dataset.tab === 'goals');
        document.getElementById('panel-tracker').classList.toggle('active', button.dataset.tab === 'tracker');
      });
    });

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      saveEntry().catch((err) => setStatus(err.message, 'error'));
    });

    logEl.addEventListener('click', (event) => {
      const button = event.target.closest('.delete-btn');
      if (!button) {
        return;
      }
      deleteEntry(button.dataset.slot).catch((err) => setStatus(err.message, 'error'));
    });

    loadLog().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
