use axum::response::Html;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Resume Screener</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    label { display: block; margin-top: 1rem; font-weight: bold; }
    textarea { width: 100%; height: 10rem; }
    button { margin-top: 1rem; }
  </style>
</head>
<body>
  <h1>Resume Screener</h1>
  <form action="/upload" method="post" enctype="multipart/form-data">
    <label for="files">Resumes (.pdf, .docx)</label>
    <input id="files" name="files" type="file" accept=".pdf,.docx" multiple required>
    <label for="job_desc">Job description</label>
    <textarea id="job_desc" name="job_desc" required></textarea>
    <button type="submit">Score resumes</button>
  </form>
</body>
</html>
"#;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
