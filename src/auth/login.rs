use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use log::{error, info};

use crate::api;
use crate::content::demo_accounts;
use crate::session;
use crate::Route;

#[function_component]
pub fn Login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    if session::is_logged_in() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let on_email = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let on_password = {
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            error.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            is_loading.set(true);
            error.set(None);
            spawn_local(async move {
                match api::login(email, password).await {
                    Ok(resp) => {
                        if session::store(&resp.access_token, &resp.user) {
                            info!("Logged in as {} ({})", resp.user.email, resp.user.role.as_str());
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/dashboard");
                            }
                        } else {
                            error.set(Some("Could not save your session in this browser".to_string()));
                        }
                    }
                    Err(e) => {
                        error!("Login failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="login-page">
            <style>
                {r#"
                    .login-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        padding: 3rem 1rem;
                        background: #f9fafb;
                    }
                    .login-container, .demo-accounts {
                        width: 100%;
                        max-width: 440px;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .login-container h1 { text-align: center; font-size: 1.8rem; margin-bottom: 0.5rem; }
                    .login-container p { text-align: center; color: #6b7280; margin-bottom: 1.5rem; }
                    .login-container label { display: block; font-weight: 500; margin-bottom: 0.3rem; }
                    .login-container input {
                        width: 100%;
                        padding: 0.7rem;
                        border: 1px solid #d1d5db;
                        border-radius: 8px;
                        margin-bottom: 1rem;
                    }
                    .login-submit {
                        width: 100%;
                        padding: 0.8rem;
                        border: none;
                        border-radius: 8px;
                        background: #2563eb;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .login-submit:disabled { opacity: 0.6; cursor: default; }
                    .error-message {
                        background: #fef2f2;
                        color: #b91c1c;
                        border-radius: 8px;
                        padding: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .demo-accounts { font-size: 0.85rem; color: #4b5563; }
                    .demo-accounts h2 { font-size: 1rem; margin-bottom: 0.75rem; }
                "#}
            </style>
            <div class="login-container">
                <h1>{"Sign in to your account"}</h1>
                <p>{"Welcome back to TecAI Kids platform"}</p>
                <form {onsubmit}>
                    if let Some(message) = (*error).as_ref() {
                        <div class="error-message">{message}</div>
                    }
                    <label for="email">{"Email address"}</label>
                    <input
                        id="email"
                        type="email"
                        required=true
                        placeholder="Enter your email"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                    <label for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        required=true
                        placeholder="Enter your password"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                    <button type="submit" class="login-submit" disabled={*is_loading}>
                        { if *is_loading { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
            <div class="demo-accounts">
                <h2>{"Demo Accounts"}</h2>
                { for demo_accounts().into_iter().map(|account| html! {
                    <p key={account.role}>
                        <strong>{format!("{}: ", account.role)}</strong>
                        {format!("{} / {}", account.email, account.password)}
                    </p>
                }) }
            </div>
        </div>
    }
}
