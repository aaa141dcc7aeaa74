use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{rating_stars, AgeGroupPath, Feature, FeaturedCourse, LandingContent, Testimonial};
use crate::counter::{format_count, CounterConfig};
use crate::pages::stats::StatsSection;
use crate::session;
use crate::Route;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <h1>{"Welcome to TecAI Kids"}</h1>
            <p class="hero-subtitle">
                {"The ultimate platform for kids to explore technology, coding, and AI through interactive lessons and games. Perfect for ages 5-16!"}
            </p>
            <div class="hero-actions">
                <Link<Route> to={Route::Login} classes="hero-cta">
                    {"Get Started Today"}
                </Link<Route>>
                <Link<Route> to={Route::Login} classes="hero-secondary">
                    {"Login"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FeaturesProps {
    features: Vec<Feature>,
}

#[function_component(Features)]
fn features(props: &FeaturesProps) -> Html {
    html! {
        <section class="features">
            <h2>{"Everything Your Child Needs to Learn Tech"}</h2>
            <p class="section-subtitle">
                {"Our comprehensive platform offers age-appropriate content, progress tracking, and certification to ensure effective learning."}
            </p>
            <div class="card-grid">
                { for props.features.iter().map(|feature| html! {
                    <div class="card feature-card" key={feature.title}>
                        <div class="feature-icon">{feature.icon}</div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                        <div class="badges">
                            { for feature.age_groups.iter().map(|group| html! {
                                <span class="badge">{*group}</span>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FeaturedCoursesProps {
    courses: Vec<FeaturedCourse>,
}

#[function_component(FeaturedCourses)]
fn featured_courses(props: &FeaturedCoursesProps) -> Html {
    html! {
        <section class="featured-courses">
            <h2>{"Featured Courses"}</h2>
            <p class="section-subtitle">{"Our most loved courses, picked by kids and parents alike."}</p>
            <div class="card-grid">
                { for props.courses.iter().map(|course| html! {
                    <div class="card course-card" key={course.id}>
                        <div class="course-image">{course.image}</div>
                        <div class="course-meta">
                            <span class="badge">{course.age}</span>
                            <span class={classes!("badge", course.premium.then_some("badge-premium"))}>
                                { if course.premium { "Premium" } else { "Free" } }
                            </span>
                        </div>
                        <h3>{course.title}</h3>
                        <p>{course.description}</p>
                        <div class="course-stats">
                            <span>{format!("⭐ {:.1}", course.rating)}</span>
                            <span>{format!("🕒 {}", course.duration)}</span>
                            <span>{format!("👥 {}", format_count(course.students))}</span>
                        </div>
                        <div class="course-lessons">{format!("{} lessons", course.lessons)}</div>
                        <Link<Route> to={Route::Login} classes="course-start">
                            {"Start Learning"}
                        </Link<Route>>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AgeGroupsProps {
    groups: Vec<AgeGroupPath>,
}

#[function_component(AgeGroups)]
fn age_groups(props: &AgeGroupsProps) -> Html {
    html! {
        <section class="age-groups">
            <h2>{"Learning Paths for Every Age"}</h2>
            <p class="section-subtitle">{"Carefully designed curricula that grow with your child"}</p>
            <div class="card-grid">
                { for props.groups.iter().map(|group| html! {
                    <div class="card age-group-card" key={group.ages}>
                        <h3 class={group.accent}>{group.ages}</h3>
                        <p class="age-stage">{group.stage}</p>
                        <ul>
                            { for group.topics.iter().map(|topic| html! { <li>{"• "}{*topic}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialsProps {
    testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section class="testimonials">
            <h2>{"What Families Are Saying"}</h2>
            <div class="card-grid">
                { for props.testimonials.iter().map(|t| html! {
                    <div class="card testimonial-card" key={t.name}>
                        <div class="testimonial-rating">{rating_stars(t.rating)}</div>
                        <p class="testimonial-text">{format!("“{}”", t.text)}</p>
                        <span class="badge">{t.highlight}</span>
                        <div class="testimonial-author">
                            <span class="testimonial-avatar">{t.avatar}</span>
                            <div>
                                <div class="testimonial-name">{t.name}</div>
                                <div class="testimonial-role">{t.role}</div>
                                <div class="testimonial-context">{t.context}</div>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="cta">
            <h2>{"Ready to Start Your Child's Tech Journey?"}</h2>
            <p>{"Join thousands of families already using TecAI Kids to prepare their children for the future of technology."}</p>
            <Link<Route> to={Route::Login} classes="hero-cta">
                {"Create Free Account"}
            </Link<Route>>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| LandingContent::default(), ());
    let counters = use_memo(|_| CounterConfig::default(), ());

    if session::is_logged_in() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page section { padding: 5rem 1.5rem; text-align: center; }
                    .landing-page h2 { font-size: 2.25rem; margin-bottom: 1rem; }
                    .section-subtitle { color: #4b5563; max-width: 720px; margin: 0 auto 3rem; font-size: 1.15rem; }
                    .hero { background: linear-gradient(90deg, #2563eb, #9333ea); color: #fff; }
                    .hero h1 { font-size: 3rem; margin-bottom: 1.5rem; }
                    .hero-subtitle { max-width: 640px; margin: 0 auto 2rem; font-size: 1.25rem; }
                    .hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                    .hero-cta, .hero-secondary, .course-start {
                        display: inline-block;
                        padding: 0.8rem 1.8rem;
                        border-radius: 10px;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .hero-cta { background: #fff; color: #2563eb; }
                    .hero-secondary { border: 2px solid #fff; color: #fff; }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        text-align: left;
                    }
                    .card {
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 1.5rem;
                        transition: box-shadow 0.2s;
                    }
                    .card:hover { box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08); }
                    .feature-icon, .course-image { font-size: 2.5rem; margin-bottom: 0.75rem; }
                    .badges, .course-meta { display: flex; gap: 0.5rem; flex-wrap: wrap; margin: 0.75rem 0; }
                    .badge { background: #eef2ff; color: #4338ca; border-radius: 999px; padding: 0.2rem 0.7rem; font-size: 0.8rem; }
                    .badge-premium { background: #fef3c7; color: #b45309; }
                    .course-stats { display: flex; gap: 1rem; color: #6b7280; font-size: 0.9rem; margin: 0.75rem 0; }
                    .course-start { background: #2563eb; color: #fff; margin-top: 1rem; }
                    .age-groups { background: #f9fafb; }
                    .accent-green { color: #16a34a; }
                    .accent-blue { color: #2563eb; }
                    .accent-purple { color: #9333ea; }
                    .age-stage { color: #6b7280; }
                    .testimonial-rating { color: #facc15; margin-bottom: 0.75rem; }
                    .testimonial-author { display: flex; gap: 0.75rem; align-items: center; margin-top: 1rem; }
                    .testimonial-avatar { font-size: 2rem; }
                    .testimonial-name { font-weight: 600; }
                    .testimonial-role, .testimonial-context { color: #6b7280; font-size: 0.85rem; }
                    .cta { background: linear-gradient(90deg, #9333ea, #2563eb); color: #fff; }
                "#}
            </style>
            <Hero />
            <Features features={content.features.clone()} />
            <FeaturedCourses courses={content.featured_courses.clone()} />
            <AgeGroups groups={content.age_groups.clone()} />
            <StatsSection config={(*counters).clone()} highlights={content.highlights.clone()} />
            <Testimonials testimonials={content.testimonials.clone()} />
            <CallToAction />
        </div>
    }
}
