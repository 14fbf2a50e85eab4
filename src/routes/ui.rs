use axum::{response::Html, routing::get, Router};

use crate::config::DEFAULT_GUIDELINES;

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<String> {
    Html(INDEX_HTML.replace("{{DEFAULT_GUIDELINES}}", &escape_html(DEFAULT_GUIDELINES)))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>AI Document Assessor</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 0; color: #1d1d1f; display: flex; min-height: 100vh; }
    aside { width: 22rem; padding: 1.5rem; background: #f4f5f7; border-right: 1px solid #ddd; }
    main { flex: 1; padding: 1.5rem 2rem; display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
    h1 { font-size: 1.4rem; margin-top: 0; }
    label { display: block; margin-top: 0.75rem; font-weight: 600; }
    input, textarea { width: 100%; padding: 0.5rem; box-sizing: border-box; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
    pre, .result { background: #f6f8fa; padding: 1rem; overflow: auto; white-space: pre-wrap; min-height: 4rem; }
    .error { color: #b00020; }
  </style>
</head>
<body>
  <aside>
    <h1>AI Document Assessor</h1>
    <label for="fileInput">Upload a PDF or DOCX file</label>
    <input id="fileInput" type="file" accept=".pdf,.docx" />
    <label for="guidelines">Assessment guidelines</label>
    <textarea id="guidelines" rows="16">{{DEFAULT_GUIDELINES}}</textarea>
  </aside>

  <main>
    <section>
      <h2>Assessment</h2>
      <button id="assessBtn">Assess Document</button>
      <h3>Assessment Report</h3>
      <div id="report" class="result"></div>
    </section>

    <section>
      <h2>Modification</h2>
      <label for="request">Request for modification (e.g., 'Fix all grammar issues')</label>
      <input id="request" value="Fix all issues based on the guidelines." />
      <button id="modifyBtn">Modify Document</button>
      <h3>Modified Document Content</h3>
      <pre id="modified"></pre>
      <button id="downloadBtn" disabled>Download Modified Text</button>
    </section>
  </main>

  <script>
    const fileInput = document.getElementById('fileInput');
    const report = document.getElementById('report');
    const modified = document.getElementById('modified');
    const downloadBtn = document.getElementById('downloadBtn');

    function buildForm(extra) {
      if (!fileInput.files.length) {
        return null;
      }
      const formData = new FormData();
      formData.append('file', fileInput.files[0]);
      formData.append('guidelines', document.getElementById('guidelines').value);
      for (const [key, value] of Object.entries(extra)) {
        formData.append(key, value);
      }
      return formData;
    }

    async function describeError(res) {
      const text = await res.text();
      try {
        return JSON.parse(text).detail || text;
      } catch (_) {
        return text;
      }
    }

    function showError(target, message) {
      target.textContent = message;
      target.classList.add('error');
    }

    document.getElementById('assessBtn').addEventListener('click', async () => {
      const formData = buildForm({});
      report.classList.remove('error');
      if (!formData) {
        showError(report, 'Please upload a document first.');
        return;
      }
      report.textContent = 'Assessing document...';
      try {
        const res = await fetch('/assess/', { method: 'POST', body: formData });
        if (res.ok) {
          const json = await res.json();
          report.textContent = json.report || 'No report generated.';
        } else {
          showError(report, 'Error from API: ' + await describeError(res));
        }
      } catch (err) {
        showError(report, 'Could not connect to the API. Details: ' + err);
      }
    });

    document.getElementById('modifyBtn').addEventListener('click', async () => {
      const formData = buildForm({ request: document.getElementById('request').value });
      modified.classList.remove('error');
      downloadBtn.disabled = true;
      if (!formData) {
        showError(modified, 'Please upload a document first.');
        return;
      }
      modified.textContent = 'Modifying document...';
      try {
        const res = await fetch('/modify/', { method: 'POST', body: formData });
        if (res.ok) {
          modified.textContent = await res.text();
          downloadBtn.disabled = false;
        } else {
          showError(modified, 'Error from API: ' + await describeError(res));
        }
      } catch (err) {
        showError(modified, 'Could not connect to the API. Details: ' + err);
      }
    });

    downloadBtn.addEventListener('click', () => {
      const blob = new Blob([modified.textContent], { type: 'text/plain' });
      const link = document.createElement('a');
      link.href = URL.createObjectURL(blob);
      link.download = 'modified_' + fileInput.files[0].name + '.txt';
      link.click();
      URL.revokeObjectURL(link.href);
    });
  </script>
</body>
</html>"#;
