// Panel navigation page shells
//
// These routes sit behind the route guard: by the time a handler renders,
// the presence check has already decided the request belongs here. The
// shells are what the panel and login frontends hydrate.

use axum::response::Html;

/// Generate HTML for the login page shell
pub fn login_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sign In - Salon Panel</title>
    <style>
        body {
            margin: 0;
            padding: 0;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #f6f3ef 0%, #e8ddd3 100%);
            color: #2d2a26;
            height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .card {
            text-align: center;
            padding: 2.5rem 3rem;
            background: #ffffff;
            border-radius: 16px;
            box-shadow: 0 8px 24px rgba(45, 42, 38, 0.08);
        }
        h1 {
            margin: 0 0 0.5rem;
            font-size: 1.5rem;
        }
        p {
            margin: 0;
            color: #8c8780;
        }
    </style>
</head>
<body>
    <div class="card">
        <h1>Salon Panel</h1>
        <p>Sign in to manage reservations, promotions and services.</p>
    </div>
</body>
</html>"#
        .to_string()
}

/// Generate HTML for the panel shell
pub fn panel_page(section: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Salon Panel</title>
    <style>
        body {{
            margin: 0;
            padding: 0;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f6f3ef;
            color: #2d2a26;
        }}
        header {{
            padding: 1rem 2rem;
            background: #ffffff;
            border-bottom: 1px solid #e8ddd3;
        }}
        main {{
            padding: 2rem;
        }}
    </style>
</head>
<body>
    <header><strong>Salon Panel</strong></header>
    <main>
        <h1>{}</h1>
        <p>Loading…</p>
    </main>
</body>
</html>"#,
        section, section
    )
}

/// GET /auth/login
pub async fn login() -> Html<String> {
    Html(login_page())
}

/// GET /bms and /bms/reservations
pub async fn reservations_panel() -> Html<String> {
    Html(panel_page("Reservations"))
}
