//! Static and templated HTML pages served by the gateway.

/// Landing page.
pub fn index_html() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>EduMat</title>
</head>
<body>
  <h1>EduMat</h1>
  <p>Educational-activity service. See <a href="/config">/config</a> for
  activity configuration and <a href="/analytics_list">/analytics_list</a>
  for the available analytics fields.</p>
</body>
</html>"#
}

/// Activity configuration page.
pub fn config_html() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>EduMat — Activity Configuration</title>
</head>
<body>
  <h1>Activity Configuration</h1>
  <form method="post" action="/deploy">
    <label>Summary <input type="text" name="summary"></label>
    <label>Instructions <input type="text" name="instructions"></label>
    <button type="submit">Save</button>
  </form>
  <p>Configurable parameters are listed at <a href="/json_params">/json_params</a>.</p>
</body>
</html>"#
}

/// Student-facing activity page, rendered from the stored record (or the
/// fallback content when the activity is unregistered).
pub fn activity_html(summary: &str, instructions: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>EduMat — Activity</title>
</head>
<body>
  <h1>Activity</h1>
  <h2>Summary</h2>
  <p>{summary}</p>
  <h2>Instructions</h2>
  <p><a href="{instructions}">{instructions}</a></p>
</body>
</html>"#
    )
}
