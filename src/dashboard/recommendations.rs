use chrono::{DateTime, Local};
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::notification::ToastMessage;
use crate::models::{LearningStats, Role, User};
use crate::recommendations::split_points;

#[derive(Properties, PartialEq)]
pub struct RecommendationsProps {
    pub user: User,
    /// Toasts go to the hosting dashboard, which draws a single `Toast`.
    pub on_toast: Callback<ToastMessage>,
}

fn refresh_toast(succeeded: bool) -> ToastMessage {
    if succeeded {
        ToastMessage::success(
            "Recommendations Updated! ✨",
            "Your personalized learning recommendations are ready.",
        )
    } else {
        ToastMessage::error("Unable to get recommendations", "Please try again later.")
    }
}

#[derive(Clone, PartialEq, Default)]
struct RecommendationsState {
    text: String,
    stats: Option<LearningStats>,
    last_updated: Option<DateTime<Local>>,
}

#[function_component]
pub fn PersonalizedRecommendations(props: &RecommendationsProps) -> Html {
    let state = use_state(RecommendationsState::default);
    let loading = use_state(|| false);

    let fetch = {
        let state = state.clone();
        let loading = loading.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |_: ()| {
            let state = state.clone();
            let loading = loading.clone();
            let on_toast = on_toast.clone();
            loading.set(true);
            spawn_local(async move {
                match api::fetch_recommendations().await {
                    Ok(resp) => {
                        state.set(RecommendationsState {
                            text: resp.recommendations,
                            stats: resp.learning_stats,
                            last_updated: Some(Local::now()),
                        });
                        on_toast.emit(refresh_toast(true));
                    }
                    Err(e) => {
                        log::error!("Error fetching recommendations: {}", e);
                        on_toast.emit(refresh_toast(false));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let fetch = fetch.clone();
        use_effect_with_deps(
            move |role: &Role| {
                if *role == Role::Student {
                    fetch.emit(());
                }
                || ()
            },
            props.user.role,
        );
    }

    if props.user.role != Role::Student {
        return html! {
            <div class="notice">{"Personalized recommendations are available for students only."}</div>
        };
    }

    let refresh = {
        let fetch = fetch.clone();
        Callback::from(move |_: MouseEvent| fetch.emit(()))
    };

    let points = split_points(&state.text);

    html! {
        <div class="recommendations-card">
            <div class="recommendations-header">
                <h2>{"🧠 Your Learning Journey ✨"}</h2>
                <button class="refresh-button" onclick={refresh.clone()} disabled={*loading}>
                    { if *loading { "Updating..." } else { "Refresh" } }
                </button>
            </div>
            <p class="recommendations-description">
                {"AI-powered personalized recommendations based on your learning progress and interests."}
            </p>

            if let Some(stats) = state.stats.as_ref() {
                <div class="learning-stats">
                    <div class="learning-stat"><div class="summary-value">{stats.total_courses}</div><div>{"Courses"}</div></div>
                    <div class="learning-stat"><div class="summary-value">{stats.completed_lessons}</div><div>{"Lessons Done"}</div></div>
                    <div class="learning-stat"><div class="summary-value">{format!("{:.0}%", stats.average_score)}</div><div>{"Avg Score"}</div></div>
                    <div class="learning-stat"><div class="summary-value">{stats.available_courses}</div><div>{"Available"}</div></div>
                </div>
            }

            if *loading {
                <div class="recommendations-loading">{"Getting your personalized recommendations..."}</div>
            } else if points.is_empty() {
                <div class="empty-state">
                    <p>{"No recommendations yet. Click refresh to get your personalized learning advice!"}</p>
                    <button class="course-action primary" onclick={refresh}>{"✨ Get My Recommendations"}</button>
                </div>
            } else {
                <h3>{format!("🎯 Recommendations for {}", props.user.display_first_name())}</h3>
                if points.len() > 1 {
                    <ol class="recommendation-points">
                        { for points.iter().map(|point| html! { <li>{point}</li> }) }
                    </ol>
                } else {
                    <div class="recommendation-text">{&state.text}</div>
                }
                <div class="badges">
                    <span class="badge">{"📈 Personalized for you"}</span>
                    if let Some(age_group) = props.user.age_group.as_ref() {
                        <span class="badge">{format!("📚 Age {}", age_group)}</span>
                    }
                    <span class="badge">{"🏅 AI-Powered"}</span>
                </div>
                if let Some(updated) = state.last_updated {
                    <div class="last-updated">{format!("Last updated: {}", updated.format("%Y-%m-%d %H:%M"))}</div>
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::ToastKind;

    #[test]
    fn refresh_outcome_picks_the_toast_kind() {
        let ok = refresh_toast(true);
        assert!(ok.kind == ToastKind::Success);
        assert_eq!(ok.title, "Recommendations Updated! ✨");

        let failed = refresh_toast(false);
        assert!(failed.kind == ToastKind::Error);
        assert_eq!(failed.description, "Please try again later.");
    }
}
