use anyhow::{Context, Result};
use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, info};

use crate::config::AppConfigInput;
use crate::emit::build_zip;
use crate::generate::{archive_file_name, plan};

/// Routes: the web form, the generate endpoint and a health probe
pub fn router() -> Router {
    Router::new()
        .route("/", get(form))
        .route("/health", get(health))
        .route("/api/generate", post(generate))
}

pub async fn run_serve(host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    info!("Mini App Builder listening on http://{}:{}", host, port);
    axum::serve(listener, router())
        .await
        .context("HTTP server stopped unexpectedly")?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn form() -> Html<&'static str> {
    Html(FORM_HTML)
}

fn generation_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to generate Mini App" })),
    )
        .into_response()
}

/// Generate the scaffold for the posted config and return it as a zip.
/// Unreadable bodies get the same generic 500 as generation failures.
pub async fn generate(body: Result<Json<AppConfigInput>, JsonRejection>) -> Response {
    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            error!(error = %rejection, "Error generating Mini App");
            return generation_failed();
        }
    };
    let config = input.resolve();
    let generation = plan(&config);

    match build_zip(&generation.files) {
        Ok(bytes) => {
            let filename = archive_file_name(&config.name);
            info!(
                app_type = %generation.app_type,
                filename = %filename,
                bytes = bytes.len(),
                "generated Mini App archive"
            );
            (
                [
                    (header::CONTENT_TYPE, "application/zip".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Error generating Mini App");
            generation_failed()
        }
    }
}

const FORM_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Mini App Builder</title>
  <style>
    body { font-family: system-ui, sans-serif; background: #0A0B0D; color: #fff; margin: 0; }
    main { max-width: 560px; margin: 0 auto; padding: 32px 16px; }
    label { display: block; font-size: 14px; margin: 16px 0 6px; }
    input, select, textarea { width: 100%; box-sizing: border-box; padding: 8px 12px; border-radius: 8px; border: 1px solid #333; background: #141519; color: #fff; }
    .check { display: flex; gap: 8px; align-items: center; }
    .check input { width: auto; }
    button { margin-top: 24px; width: 100%; padding: 12px; border: 0; border-radius: 8px; background: #0052FF; color: #fff; font-weight: 600; cursor: pointer; }
    button:disabled { background: #555; }
    #status { margin-top: 12px; font-size: 14px; color: #aaa; }
  </style>
</head>
<body>
<main>
  <h1>Mini App Builder</h1>
  <form id="builder">
    <label for="name">Mini App Name *</label>
    <input id="name" required placeholder="My Awesome Mini App">

    <label for="description">Description</label>
    <textarea id="description" rows="3" placeholder="A Base Mini App"></textarea>

    <label for="category">Category</label>
    <select id="category">
      <option value="social">Social</option>
      <option value="gaming">Gaming</option>
      <option value="defi">DeFi</option>
      <option value="utility">Utility</option>
    </select>

    <label for="homeUrl">Home URL</label>
    <input id="homeUrl" type="url" placeholder="https://your-miniapp.com">

    <label for="features">Features (one per line)</label>
    <textarea id="features" rows="4"></textarea>

    <label class="check"><input id="needsTransaction" type="checkbox"> Needs transaction support</label>
    <label class="check"><input id="needsAgent" type="checkbox"> Needs agent integration</label>

    <div id="agentField" hidden>
      <label for="agentAddress">Agent Address</label>
      <input id="agentAddress" placeholder="0x...">
    </div>

    <button id="submit" type="submit">Generate Mini App</button>
    <p id="status"></p>
  </form>
</main>
<script>
  const field = (id) => document.getElementById(id);
  field('needsAgent').addEventListener('change', (e) => {
    field('agentField').hidden = !e.target.checked;
  });

  field('builder').addEventListener('submit', async (e) => {
    e.preventDefault();
    const config = {
      name: field('name').value,
      description: field('description').value,
      category: field('category').value,
      features: field('features').value.split('\n').filter((f) => f.trim()),
      needsTransaction: field('needsTransaction').checked,
      needsAgent: field('needsAgent').checked,
      homeUrl: field('homeUrl').value,
      agentAddress: field('agentAddress').value || undefined,
    };

    field('submit').disabled = true;
    field('status').textContent = 'Generating...';
    try {
      const response = await fetch('/api/generate', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(config),
      });
      if (!response.ok) throw new Error('Failed to generate Mini App');

      const disposition = response.headers.get('Content-Disposition') || '';
      const match = disposition.match(/filename="([^"]+)"/);
      const blob = await response.blob();
      const link = document.createElement('a');
      link.href = URL.createObjectURL(blob);
      link.download = match ? match[1] : 'miniapp.zip';
      link.click();
      URL.revokeObjectURL(link.href);
      field('status').textContent = 'Done.';
    } catch (err) {
      field('status').textContent = err.message;
    } finally {
      field('submit').disabled = false;
    }
  });
</script>
</body>
</html>
"##;
