use yew::prelude::*;
use yew_router::prelude::*;

use crate::dashboard::overview::RoleOverview;
use crate::dashboard::student::StudentDashboard;
use crate::models::Role;
use crate::session;
use crate::Route;

#[function_component]
pub fn Dashboard() -> Html {
    let Some(user) = session::current_user() else {
        return html! { <Redirect<Route> to={Route::Login} /> };
    };

    let body = match user.role {
        Role::Student => html! { <StudentDashboard user={user} /> },
        Role::Parent | Role::Teacher | Role::Admin => html! { <RoleOverview user={user} /> },
        Role::Unknown => html! {
            <div class="dashboard-container">
                <div class="notice">
                    {"Your account doesn't have a dashboard yet. Please contact support."}
                </div>
            </div>
        },
    };

    html! {
        <div class="dashboard-page">
            <style>
                {r#"
                    .dashboard-container { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
                    .dashboard-header h1 { font-size: 2rem; margin-bottom: 0.5rem; }
                    .dashboard-header p { color: #4b5563; margin-bottom: 2rem; }
                    .dashboard-loading { display: flex; justify-content: center; padding: 6rem 0; }
                    .loading-spinner {
                        width: 48px;
                        height: 48px;
                        border: 4px solid #dbeafe;
                        border-top-color: #2563eb;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .summary-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .summary-card, .course-card, .activity-item, .recommendations-card, .notice, .empty-state {
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        border-radius: 12px;
                        padding: 1.25rem;
                    }
                    .summary-title { font-size: 0.85rem; font-weight: 500; color: #4b5563; }
                    .summary-value { font-size: 1.6rem; font-weight: 700; }
                    .summary-note { font-size: 0.75rem; color: #6b7280; }
                    .badge { background: #eef2ff; color: #4338ca; border-radius: 999px; padding: 0.2rem 0.7rem; font-size: 0.8rem; }
                    .badge-enrolled { background: #2563eb; color: #fff; }
                    .badges { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-top: 1rem; }
                    .age-badge { display: inline-block; margin-bottom: 1.5rem; }
                    .course-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .course-card-header { display: flex; justify-content: space-between; align-items: center; }
                    .star { color: #d1d5db; }
                    .star.filled { color: #facc15; }
                    .course-progress-label { display: flex; justify-content: space-between; font-size: 0.85rem; }
                    .progress-bar { height: 8px; background: #e5e7eb; border-radius: 4px; overflow: hidden; }
                    .progress-fill { height: 100%; background: #2563eb; }
                    .course-action {
                        width: 100%;
                        margin-top: 1rem;
                        padding: 0.6rem;
                        border-radius: 8px;
                        border: 1px solid #2563eb;
                        background: #fff;
                        color: #2563eb;
                        cursor: pointer;
                    }
                    .course-action.primary { background: #2563eb; color: #fff; }
                    .activity-list { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 2rem; }
                    .activity-item { display: flex; justify-content: space-between; align-items: center; }
                    .activity-meta { color: #6b7280; font-size: 0.85rem; }
                    .activity-progress { text-align: right; }
                    .recommendations-header { display: flex; justify-content: space-between; align-items: center; }
                    .learning-stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin: 1rem 0; }
                    .learning-stat { text-align: center; background: #f5f3ff; border-radius: 8px; padding: 0.75rem; }
                    .recommendation-text { white-space: pre-wrap; line-height: 1.6; }
                    .last-updated { color: #6b7280; font-size: 0.75rem; margin-top: 0.5rem; }
                "#}
            </style>
            { body }
        </div>
    }
}
