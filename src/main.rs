use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};

mod api;
mod config;
mod content;
mod counter;
mod models;
mod progress;
mod recommendations;
mod session;

mod components {
    pub mod notification;
}
mod pages {
    pub mod dashboard;
    pub mod landing;
    pub mod stats;
}
mod auth {
    pub mod login;
}
mod dashboard {
    pub mod overview;
    pub mod recommendations;
    pub mod student;
}

use auth::login::Login;
use models::User;
use pages::{dashboard::Dashboard, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        },
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <Dashboard /> }
        },
        Route::NotFound => {
            info!("Unknown route, sending to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub user: Option<User>,
    pub on_logout: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { user, on_logout } = props;
    let menu_open = use_state(|| false);
    let route = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let handle_logout = {
        let on_logout = on_logout.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_logout.emit(());
        })
    };

    let active = |target: Route| (route.as_ref() == Some(&target)).then_some("active");

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav { background: #fff; border-bottom: 1px solid #e5e7eb; }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        height: 64px;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0 1rem;
                    }
                    .nav-logo { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; font-size: 1.25rem; color: #111827; text-decoration: none; }
                    .nav-logo-mark {
                        width: 32px;
                        height: 32px;
                        border-radius: 8px;
                        background: linear-gradient(90deg, #2563eb, #9333ea);
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.9rem;
                    }
                    .nav-right { display: flex; align-items: center; gap: 1.25rem; }
                    .nav-link { color: #374151; text-decoration: none; }
                    .nav-link.active { color: #2563eb; }
                    .nav-cta { background: #2563eb; color: #fff; padding: 0.5rem 1rem; border-radius: 8px; text-decoration: none; }
                    .user-menu { position: relative; }
                    .avatar {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        border: none;
                        background: #dbeafe;
                        color: #2563eb;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .user-dropdown {
                        position: absolute;
                        right: 0;
                        top: 48px;
                        width: 224px;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        border-radius: 8px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.1);
                        padding: 0.5rem;
                        z-index: 50;
                    }
                    .user-dropdown .user-name { font-weight: 500; }
                    .user-dropdown .user-email { font-size: 0.75rem; color: #6b7280; }
                    .user-dropdown hr { border: none; border-top: 1px solid #e5e7eb; margin: 0.5rem 0; }
                    .user-dropdown a, .user-dropdown button {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.4rem;
                        background: none;
                        border: none;
                        color: #111827;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .role-admin { color: #dc2626; }
                    .role-teacher { color: #2563eb; }
                    .role-parent { color: #16a34a; }
                    .role-student { color: #9333ea; }
                    .role-unknown { color: #4b5563; }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"T"}</span>
                    {"TecAI Kids"}
                </Link<Route>>
                <div class="nav-right">
                    {
                        match user {
                            None => html! {
                                <>
                                    <Link<Route> to={Route::Home} classes={classes!("nav-link", active(Route::Home))}>
                                        {"Home"}
                                    </Link<Route>>
                                    <Link<Route> to={Route::Login} classes={classes!("nav-link", active(Route::Login))}>
                                        {"Login"}
                                    </Link<Route>>
                                    <Link<Route> to={Route::Login} classes="nav-cta">
                                        {"Get Started"}
                                    </Link<Route>>
                                </>
                            },
                            Some(user) => html! {
                                <>
                                    <Link<Route> to={Route::Dashboard} classes={classes!("nav-link", active(Route::Dashboard))}>
                                        {"Dashboard"}
                                    </Link<Route>>
                                    <div class="user-menu">
                                        <button class="avatar" onclick={toggle_menu}>{user.initials()}</button>
                                        if *menu_open {
                                            <div class="user-dropdown">
                                                <div class="user-name">{user.display_name()}</div>
                                                <div class="user-email">{&user.email}</div>
                                                <div class={classes!("user-role", user.role.badge_class())}>{user.role.label()}</div>
                                                <hr />
                                                <div onclick={close_menu}>
                                                    <Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                                                </div>
                                                <hr />
                                                <button onclick={handle_logout}>{"Log out"}</button>
                                            </div>
                                        }
                                    </div>
                                </>
                            },
                        }
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let user = use_state(session::current_user);
    let handle_logout = {
        Callback::from(move |_| {
            session::clear();
            if let Some(window) = window() {
                // Full navigation so every view re-reads the now empty session
                let _ = window.location().set_href("/");
            }
        })
    };

    html! {
        <BrowserRouter>
            <Nav user={(*user).clone()} on_logout={handle_logout} />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
