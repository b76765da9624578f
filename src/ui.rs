use crate::models::{Dataset, Phase};
use crate::stats::build_summary;

pub const FAILURE_MESSAGE: &str = "An error occurred.";

/// Render the page for `phase` with the bar at `bar_width` percent.
///
/// `live` keeps the page polling `/api/status` until nothing is left to
/// change: still loading, or a fill that has not landed yet.
pub fn render_index(phase: &Phase, bar_width: f64, live: bool) -> String {
    let content = match phase {
        Phase::Idle => String::new(),
        Phase::Loading => r#"<div class="notice">Loading...</div>"#.to_string(),
        Phase::Failed => format!(r#"<div class="notice error">{FAILURE_MESSAGE}</div>"#),
        Phase::Loaded(dataset) => render_dataset(dataset, bar_width),
    };

    INDEX_HTML
        .replace("{{PHASE}}", phase.kind().as_str())
        .replace("{{LIVE}}", if live { "true" } else { "false" })
        .replace("{{CONTENT}}", &content)
}

fn render_dataset(dataset: &Dataset, bar_width: f64) -> String {
    let summary = build_summary(dataset);
    let width = bar_width.clamp(0.0, 100.0);

    format!(
        r#"<p class="goal">This year I want to ride my bike at least <strong>{goal} km</strong>.</p>
    <section class="progress">
      <span class="label">Current progress:</span>
      <span class="total">{progress_text}</span>
      <div class="track"><div id="fill" class="fill" style="width: {width}%"></div></div>
      <span class="percent">{percent}%</span>
    </section>
    <span class="meta">Last ride: {last_ride}</span>
    <span class="meta">Longest ride: {longest}km</span>"#,
        goal = dataset.goal(),
        progress_text = summary.progress_text,
        percent = summary.percent,
        last_ride = escape_html(&summary.last_ride),
        longest = summary.longest_ride,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Cycling Log</title>
  <style>
    :root {
      --ink: #0f172a;
      --muted: #64748b;
      --track: #cbd5e1;
      --fill: #334155;
      --accent: #6366f1;
      --error: #dc2626;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      color: var(--ink);
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    }

    .app {
      max-width: 42rem;
      margin: 0 auto;
      padding: 40px 24px;
      text-align: center;
    }

    .emoji {
      font-size: 64px;
      line-height: 1;
    }

    h1 {
      font-size: 1.5rem;
      font-weight: 700;
      margin: 12px 0 0;
    }

    .notice,
    .goal,
    .progress {
      margin-top: 20px;
    }

    .notice.error {
      color: var(--error);
    }

    .goal strong {
      font-weight: 600;
    }

    .progress .label {
      display: block;
      font-weight: 500;
    }

    .progress .total {
      display: block;
      margin-top: 4px;
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
    }

    .track {
      background: var(--track);
      height: 16px;
      margin-top: 24px;
      border-radius: 6px;
      overflow: hidden;
    }

    .fill {
      background: var(--fill);
      height: 100%;
      transition: width 500ms ease;
    }

    .percent {
      display: block;
      margin-top: 8px;
      font-size: 0.875rem;
      font-weight: 500;
    }

    .meta {
      display: block;
      margin-top: 4px;
      font-size: 0.75rem;
      color: var(--muted);
    }

    .meta:first-of-type {
      margin-top: 20px;
    }
  </style>
</head>
<body>
  <main class="app" data-phase="{{PHASE}}" data-live="{{LIVE}}">
    <header>
      <div class="emoji" role="img" aria-label="Bike Emoji">&#128690;</div>
      <h1>Cycling Log</h1>
    </header>
    {{CONTENT}}
  </main>

  <script>
    const app = document.querySelector('.app');
    const renderedPhase = app.dataset.phase;

    const poll = async () => {
      const res = await fetch('/api/status');
      if (!res.ok) {
        return;
      }
      const status = await res.json();
      if (status.phase !== renderedPhase) {
        window.location.reload();
        return;
      }
      const fill = document.getElementById('fill');
      if (fill) {
        fill.style.width = `${Math.min(Math.max(status.bar_width, 0), 100)}%`;
        if (status.summary && status.bar_width === Number(status.summary.percent)) {
          return;
        }
      }
      setTimeout(poll, 250);
    };

    if (app.dataset.live === 'true') {
      setTimeout(poll, 250);
    }
  </script>
</body>
</html>
"#;
