//! Copy for the marketing pages. Built once by the landing page and handed to
//! each section as props.

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub age_groups: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedCourse {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub age: &'static str,
    pub duration: &'static str,
    pub students: u64,
    pub rating: f32,
    pub premium: bool,
    pub image: &'static str,
    pub lessons: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgeGroupPath {
    pub ages: &'static str,
    pub stage: &'static str,
    pub accent: &'static str,
    pub topics: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub context: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub avatar: &'static str,
    pub highlight: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoAccount {
    pub role: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingContent {
    pub features: Vec<Feature>,
    pub featured_courses: Vec<FeaturedCourse>,
    pub age_groups: Vec<AgeGroupPath>,
    pub testimonials: Vec<Testimonial>,
    pub highlights: Vec<Highlight>,
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            features: vec![
                Feature {
                    icon: "💻",
                    title: "Interactive Coding Lessons",
                    description: "Learn programming through fun, hands-on activities designed for kids",
                    age_groups: vec!["5-8", "9-12", "13-16"],
                },
                Feature {
                    icon: "🧠",
                    title: "AI & Technology Games",
                    description: "Explore artificial intelligence concepts through engaging educational games",
                    age_groups: vec!["9-12", "13-16"],
                },
                Feature {
                    icon: "👪",
                    title: "Parent Dashboard",
                    description: "Track your child's progress and achievements in real-time",
                    age_groups: vec!["Parent"],
                },
                Feature {
                    icon: "📚",
                    title: "Teacher Tools",
                    description: "Create and manage educational content with our comprehensive admin panel",
                    age_groups: vec!["Teacher"],
                },
                Feature {
                    icon: "🏅",
                    title: "Certificates & Achievements",
                    description: "Earn certificates as you complete learning stages and milestones",
                    age_groups: vec!["All Ages"],
                },
                Feature {
                    icon: "🎮",
                    title: "Gamified Learning",
                    description: "Make learning fun with our game-based educational approach",
                    age_groups: vec!["5-8", "9-12"],
                },
            ],
            featured_courses: vec![
                FeaturedCourse {
                    id: 1,
                    title: "Math Adventures",
                    description: "Fun math games and puzzles that make numbers exciting for young learners.",
                    age: "5-8 years",
                    duration: "30 mins",
                    students: 1250,
                    rating: 4.9,
                    premium: false,
                    image: "🔢",
                    lessons: 25,
                },
                FeaturedCourse {
                    id: 2,
                    title: "Science Explorers",
                    description: "Discover the wonders of science through interactive experiments and activities.",
                    age: "6-10 years",
                    duration: "45 mins",
                    students: 980,
                    rating: 4.8,
                    premium: false,
                    image: "🔬",
                    lessons: 30,
                },
                FeaturedCourse {
                    id: 3,
                    title: "Creative Writing",
                    description: "Unleash imagination with storytelling, poetry, and creative writing exercises.",
                    age: "7-12 years",
                    duration: "40 mins",
                    students: 750,
                    rating: 4.9,
                    premium: false,
                    image: "✍️",
                    lessons: 20,
                },
                FeaturedCourse {
                    id: 4,
                    title: "Art & Design",
                    description: "Express creativity through digital art, drawing, and design fundamentals.",
                    age: "5-11 years",
                    duration: "35 mins",
                    students: 890,
                    rating: 4.7,
                    premium: false,
                    image: "🎨",
                    lessons: 28,
                },
                FeaturedCourse {
                    id: 5,
                    title: "Coding for Kids",
                    description: "Learn programming basics through visual coding and fun projects.",
                    age: "8-12 years",
                    duration: "50 mins",
                    students: 1150,
                    rating: 4.9,
                    premium: true,
                    image: "💻",
                    lessons: 35,
                },
            ],
            age_groups: vec![
                AgeGroupPath {
                    ages: "Ages 5-8",
                    stage: "Early Elementary",
                    accent: "accent-green",
                    topics: vec!["Visual programming basics", "Simple logic games", "Creative digital art", "Story-based learning"],
                },
                AgeGroupPath {
                    ages: "Ages 9-12",
                    stage: "Late Elementary",
                    accent: "accent-blue",
                    topics: vec!["Block-based coding", "Basic AI concepts", "Game development", "Problem-solving challenges"],
                },
                AgeGroupPath {
                    ages: "Ages 13-16",
                    stage: "Middle & High School",
                    accent: "accent-purple",
                    topics: vec!["Text-based programming", "Advanced AI & ML", "Web development", "Real-world projects"],
                },
            ],
            testimonials: vec![
                Testimonial {
                    name: "Sarah Johnson",
                    role: "Parent of 2 children",
                    context: "Kids: 7 & 9 years",
                    rating: 5,
                    text: "TecaiKids has transformed how my children approach learning. They actually look forward to their daily lessons now! The interactive games make math and science so much fun.",
                    avatar: "👩‍💼",
                    highlight: "Improved Math Skills by 40%",
                },
                Testimonial {
                    name: "Michael Chen",
                    role: "Elementary Teacher",
                    context: "Teaching Grade 3",
                    rating: 5,
                    text: "As an educator, I'm impressed by the quality of content and the adaptive learning technology. My students' engagement levels have increased dramatically since we started using TecaiKids.",
                    avatar: "👨‍🏫",
                    highlight: "Used by 500+ Students",
                },
                Testimonial {
                    name: "Emily Rodriguez",
                    role: "Homeschool Mom",
                    context: "3 kids at home",
                    rating: 5,
                    text: "The progress tracking and personalized learning paths are incredible. Each of my children learns at their own pace, and I can monitor their development easily.",
                    avatar: "👩‍🎓",
                    highlight: "Homeschooling Success",
                },
                Testimonial {
                    name: "David Thompson",
                    role: "Dad & Software Engineer",
                    context: "Daughter: 8 years",
                    rating: 5,
                    text: "The coding courses are exceptional! My daughter went from knowing nothing about programming to creating her own simple games. The curriculum is well-structured and age-appropriate.",
                    avatar: "👨‍💻",
                    highlight: "Coding Skills Developed",
                },
                Testimonial {
                    name: "Lisa Park",
                    role: "Working Mom",
                    context: "Son: 6 years",
                    rating: 5,
                    text: "With my busy schedule, TecaiKids has been a lifesaver. The bite-sized lessons fit perfectly into our routine, and my son loves the achievement badges and rewards system.",
                    avatar: "👩‍💼",
                    highlight: "Perfect for Busy Families",
                },
            ],
            highlights: vec![
                Highlight { title: "Award Winning", description: "Best Educational App 2024" },
                Highlight { title: "Parent Approved", description: "98% Parent Satisfaction Rate" },
                Highlight { title: "Educator Endorsed", description: "Recommended by 1000+ Teachers" },
            ],
        }
    }
}

pub fn demo_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount { role: "Student", email: "student@demo.com", password: "demo123" },
        DemoAccount { role: "Parent", email: "parent@demo.com", password: "demo123" },
        DemoAccount { role: "Teacher", email: "teacher@demo.com", password: "demo123" },
        DemoAccount { role: "Admin", email: "admin@demo.com", password: "demo123" },
    ]
}

/// Filled and empty stars for a rating, e.g. `★★★★☆` for 4.
pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_content() {
        let content = LandingContent::default();
        assert_eq!(content.features.len(), 6);
        assert_eq!(content.age_groups.len(), 3);
        assert!(!content.featured_courses.is_empty());
        assert!(!content.testimonials.is_empty());
        assert_eq!(content.highlights.len(), 3);
        assert!(content.features.iter().all(|f| !f.age_groups.is_empty()));
    }

    #[test]
    fn featured_course_ids_are_unique() {
        let content = LandingContent::default();
        let mut ids: Vec<u32> = content.featured_courses.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.featured_courses.len());
    }

    #[test]
    fn stars_cap_at_five() {
        assert_eq!(rating_stars(5), "★★★★★");
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(9), "★★★★★");
    }
}
