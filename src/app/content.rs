//! The fixed dataset behind the page: résumé content, copy, photo paths,
//! and the timer cadences the interactive sections run on.
//!
//! Everything here is supplied to the components at construction and never
//! changes for the lifetime of a page view.

pub const NAME: &str = "Sonal Misra";
pub const PROFILE_PHOTO: &str = "/photos/sonal.JPG";
pub const EMAIL: &str = "s22misra@uwaterloo.ca";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sonal-misra-3807901bb/";
pub const LINKEDIN_LABEL: &str = "linkedin.com/in/sonal-misra";
pub const BLOG_URL: &str = "https://sonalmisrablog.home.blog/";

/// Rotating hero headline, one frame every `HEADLINE_INTERVAL_MS`.
pub static HEADLINES: [&str; 6] = [
    "Sonal Misra",
    "University of Waterloo",
    "Psychology × Business × Legal Studies",
    "Builds systems that scale",
    "Runs long distances on purpose",
    "Human-first marketer",
];

pub const HEADLINE_INTERVAL_MS: u64 = 3000;
pub const GALLERY_INTERVAL_MS: u64 = 4000;

/// How far a section must scroll into view before its counters start.
pub const VISIBLE_THRESHOLD: f64 = 0.3;

/// An auto-advancing displayed metric: counts up by one every `step_ms`
/// until it reaches `target`, then stops.
#[derive(Debug, Clone, Copy)]
pub struct CounterSpec {
    pub target: u32,
    pub step_ms: u64,
    pub prefix: &'static str,
    pub caption: &'static str,
}

pub const HOURS_SAVED: CounterSpec = CounterSpec {
    target: 22,
    step_ms: 80,
    prefix: "+",
    caption: "hours saved/month",
};

pub const DAYS_SAVED: CounterSpec = CounterSpec {
    target: 3,
    step_ms: 500,
    prefix: "",
    caption: "days saved",
};

pub struct Role {
    pub year: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub context: &'static str,
    pub problem: &'static str,
    pub ownership: &'static str,
    pub tools: &'static [&'static str],
    pub impact: &'static [&'static str],
}

pub static ROLES: [Role; 4] = [
    Role {
        year: "2025",
        title: "Customer Engagement Marketing Coordinator",
        company: "PointClickCare",
        context: "SaaS healthcare platform, scaling customer engagement and adoption",
        problem: "Low survey response rates, manual campaign work eating team time, slow asset approval cycles",
        ownership: "Led customer activation, AI automation, and process innovation initiatives",
        tools: &["GPT", "Power Automate", "Salesforce", "MS Forms", "SharePoint"],
        impact: &[
            "56% survey engagement lift",
            "21% more reviews generated",
            "17+ hours saved per campaign",
            "300+ customers activated on Pulse platform",
        ],
    },
    Role {
        year: "2024",
        title: "Customer Success Intern",
        company: "PointClickCare",
        context: "Healthcare SaaS, managing customer data and engagement campaigns",
        problem: "2,000+ forwarding contacts lost in auto-reply emails, low engagement from dormant customers",
        ownership: "Built lead data automation, reactivation campaigns, and first Pharmacy digest",
        tools: &["Excel", "Power Automate", "Email Marketing", "Analytics"],
        impact: &[
            "2,000+ contacts consolidated",
            "10% engagement lift",
            "$6,500 added MRR",
            "400+ customers reached via digest",
        ],
    },
    Role {
        year: "2023",
        title: "HR Corporate & Community Affairs Intern",
        company: "Fidelity Investments",
        context: "2,000+ employees, improving internal comms and engagement",
        problem: "Low intranet engagement, unclear company achievements visibility",
        ownership: "Led content optimization and CSR initiative coordination",
        tools: &["Adobe Experience Manager", "Viva Engage", "Yammer", "Surveys"],
        impact: &[
            "15% positive sentiment increase",
            "1,000+ employees engaged in CSR",
            "Enhanced platform analytics insights",
        ],
    },
    Role {
        year: "2023",
        title: "Business Operations Intern",
        company: "Fidelity Investments",
        context: "Registered products department, high-volume processing operations",
        problem: "Slow processing times, delayed transfer requests impacting customer satisfaction",
        ownership: "Streamlined processing workflows and monitored transfer operations",
        tools: &["Financial Systems", "Data Analysis", "Reporting Tools"],
        impact: &[
            "25% faster processing",
            "40% customer satisfaction improvement",
            "Improved decision-making through statistical analysis",
        ],
    },
];

pub struct CaseStudy {
    pub title: &'static str,
    pub outcome: &'static str,
    pub goal: &'static str,
    pub insight: &'static str,
    pub strategy: &'static str,
    pub execution: &'static str,
    pub result: &'static str,
    pub next_test: &'static str,
}

/// Step labels for the case-study walkthrough, in reading order. Each step
/// renders one field of the selected [`CaseStudy`].
pub static CASE_STEPS: [&str; 6] = [
    "Goal",
    "Insight",
    "Strategy",
    "Execution",
    "Result",
    "Next Test",
];

pub static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        title: "How We Reactivated \"Dead\" Customers",
        outcome: "10% Engagement Lift",
        goal: "Re-engage low-activity customers who stopped interacting",
        insight: "The myth: If customers stop engaging, they're gone. The reality: Most were just overlooked. Behavior data showed patterns hiding in plain sight—these users weren't uninterested, they just weren't being spoken to properly.",
        strategy: "Segment low-engagement users and build re-engagement campaigns that spoke to one clear use case at a time, felt human (not automated), and made re-engaging frictionless.",
        execution: "Built targeted campaigns addressing specific pain points per segment. Each message focused on a single use case with clear, conversational copy that removed barriers to action.",
        result: "📈 Engagement increased 10% | 💰 $6.5K in recovered MRR",
        next_test: "Test proactive outreach when usage patterns match at-risk cohort behavior",
    },
    CaseStudy {
        title: "The NPS Follow-Up Everyone Skipped",
        outcome: "56% Higher Survey Engagement",
        goal: "Increase engagement with high-NPS customers",
        insight: "Most NPS programs treat every response the same. High-NPS customers were already happy—so instead of another generic survey email, I treated them like insiders.",
        strategy: "Segment promoters only. Use lightweight challenges instead of long surveys. Focus on momentum, not reminders.",
        execution: "Created short, value-driven asks that made customers feel like insiders. Used challenge-based formats that felt engaging, not extractive. Timed outreach for maximum response rates.",
        result: "📊 56% higher engagement | ⭐ 21% more customer reviews",
        next_test: "Build tiered insider programs based on engagement frequency and referral quality",
    },
    CaseStudy {
        title: "What 30 Posts Taught Me About Small Brands",
        outcome: "20% Social Engagement Lift",
        goal: "Increase meaningful social media engagement for small brand",
        insight: "Posting more didn't move the needle. Learning faster did. Polished content lost. Clear, relatable content won.",
        strategy: "Test formats, hooks, timing, and tone across 30 posts—then double down on what actually stopped the scroll. Pair social learnings with website refresh so engagement didn't drop after the click.",
        execution: "Ran rapid experiments across post types. Tracked what drove real interaction vs vanity metrics. Optimized website experience to match social messaging and maintain momentum.",
        result: "🔥 20% lift in engagement | 👀 Fewer vanity metrics, more real interaction",
        next_test: "Create content templates from top-performing formats to scale winning patterns",
    },
];

pub struct AutomationProject {
    pub title: &'static str,
    pub summary: &'static str,
    pub problem: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub impact: &'static [&'static str],
}

pub static AUTOMATIONS: [AutomationProject; 3] = [
    AutomationProject {
        title: "Out-of-Office Contact Tracker",
        summary: "Automated system that collects out-of-office and role-change contacts from monthly digest auto-reply emails.",
        problem: &[
            "Hundreds of auto-replies every month",
            "Manual scanning of inboxes",
            "Missed or outdated contacts",
        ],
        tools: &["Power Automate", "Excel"],
        impact: &["⏱️ Hours saved each month"],
    },
    AutomationProject {
        title: "Asset Publishing Workflow",
        summary: "Centralized workflow for requesting, approving, tracking, and publishing marketing assets.",
        problem: &[
            "Requests via email, chat, DMs",
            "No visibility into approval status",
            "Missed deadlines",
        ],
        tools: &["MS Forms", "SharePoint"],
        impact: &["⏱️ Eliminated manual follow-ups"],
    },
    AutomationProject {
        title: "AI-Powered Personalized Emails",
        summary: "GPT-powered workflow that generates hundreds of personalized emails with custom salutations and unique links.",
        problem: &[
            "Manual personalization at scale",
            "Copy-paste errors",
            "Long campaign prep times",
        ],
        tools: &["GPT", "Power Automate"],
        impact: &["⏱️ 17+ hours saved per campaign", "📧 200+ emails instantly"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub outcome: &'static str,
    pub tools: &'static [&'static str],
    pub what_it_is: &'static str,
    pub problem: &'static [&'static str],
    pub system: &'static [&'static str],
    pub impact: &'static [&'static str],
}

pub static PROJECTS: [Project; 2] = [
    Project {
        title: "Growing a Local Brand Through Strategy & Content",
        description: "Freelance Marketing Consultant — Pristine Clean with Kayla",
        location: "Niagara Region · Jan 2024 – Apr 2024",
        outcome: "📊 20% increase in engagement",
        tools: &["Instagram", "LinkedIn", "Google Search Console", "Website CMS"],
        what_it_is: "A freelance marketing engagement focused on increasing visibility, engagement, and traffic for a growing local service business.",
        problem: &[
            "Inconsistent social presence",
            "Low discoverability online",
            "No clear content strategy tied to performance data",
        ],
        system: &[
            "Built a targeted content strategy for LinkedIn & Instagram",
            "Created and published 30 platform-specific posts",
            "Redesigned the website using insights from Google Search Console",
            "Worked closely with the client to align timelines, feedback, and goals",
        ],
        impact: &[
            "📊 20% increase in engagement",
            "🔍 Improved site traffic and discoverability",
            "🤝 High client satisfaction through clear communication and delivery",
        ],
    },
    Project {
        title: "Building an AI System for Personalized Financial Guidance",
        description: "WE Accelerate — Microsoft Azure AI Project",
        location: "Toronto · May 2022 – Aug 2022",
        outcome: "📌 Enabled individualized financial advice at scale",
        tools: &["Microsoft Azure", "NLP Models", "Kaggle Datasets", "Data Pipelines"],
        what_it_is: "A team project to design a financial advisory AI that delivers personalized investment insights to help reduce wealth inequality.",
        problem: &[
            "Financial advice is often inaccessible or generic",
            "Users need tailored guidance based on their individual data",
        ],
        system: &[
            "Co-developed a financial advisory AI system with a 4-person team",
            "Designed an NLP model to collect and interpret client inputs",
            "Used Kaggle datasets to inform investment strategies",
            "Built an Azure-based pipeline to analyze responses and generate personalized recommendations",
        ],
        impact: &[
            "📌 Enabled individualized financial advice at scale",
            "🧠 Applied AI to a real social problem, not just a technical exercise",
            "🤝 Strengthened collaboration across technical and non-technical roles",
        ],
    },
];

pub struct Story {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub problem: &'static str,
    pub system: &'static str,
    pub how_it_works: &'static [&'static str],
    pub why_it_matters: &'static str,
    pub tools: &'static [&'static str],
}

pub static STORIES: [Story; 3] = [
    Story {
        title: "Product Launch Command Center",
        subtitle: "One place to plan, track, and measure every launch",
        problem: "Product launches lived across decks, documents, emails, and meetings, making ownership unclear and performance hard to track.",
        system: "A centralized launch intake workflow that automatically creates go-to-market tasks, assigns owners, and tracks launch milestones and KPIs in one place.",
        how_it_works: &[
            "A standardized launch intake form captures key inputs (product, audience, timeline, goals)",
            "Submission triggers automated creation of launch tasks and owners across teams",
            "Milestones and dependencies are tracked in a shared workspace",
            "Launch progress auto-updates status and KPIs in real time",
        ],
        why_it_matters: "Improves launch consistency, reduces manual coordination, and gives leadership clear visibility into launch readiness and impact.",
        tools: &["Power Automate", "Microsoft Forms", "SharePoint", "Planner", "Teams"],
    },
    Story {
        title: "Launch KPI Auto-Tracker",
        subtitle: "Stop manually reporting—let the data tell the story",
        problem: "Post-launch performance data was scattered across tools, requiring manual reporting to understand what worked and what didn't.",
        system: "A recurring automation that pulls pipeline, adoption, and engagement data tied to each launch and compares planned vs. actual KPIs.",
        how_it_works: &[
            "Launch KPIs are defined upfront and stored centrally",
            "A scheduled automation pulls performance data from CRM and reporting sources",
            "Actual results are compared against launch targets automatically",
            "A recurring summary highlights trends, gaps, and areas needing adjustment",
        ],
        why_it_matters: "Enables PMMs to quickly evaluate launch success, adjust messaging or strategy, and communicate performance with confidence.",
        tools: &["Power Automate", "Salesforce", "Excel / Power BI", "SharePoint"],
    },
    Story {
        title: "Deal-Triggered Sales Enablement",
        subtitle: "The right message, at the right stage, automatically",
        problem: "Sales teams didn't always have the right messaging or assets at the right stage of the buying process.",
        system: "A Salesforce-triggered automation that detects opportunity stage changes and delivers relevant PMM-approved messaging, decks, and references in real time.",
        how_it_works: &[
            "Opportunity stages in Salesforce act as triggers",
            "Each stage is mapped to approved PMM messaging and assets",
            "When a deal progresses, the relevant materials are automatically delivered to Sales",
            "Content stays consistent and up to date without manual PMM intervention",
        ],
        why_it_matters: "Improves message consistency, reduces friction for Sales, and ensures PMM strategy shows up where it matters most—inside active deals.",
        tools: &["Power Automate", "Salesforce", "Outlook / Teams", "SharePoint"],
    },
];

pub struct Testimonial {
    pub short_quote: &'static str,
    pub full_quote: &'static str,
    pub author: &'static str,
    pub title: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        short_quote: "I've had the pleasure of working with Sonal, and I can confidently say she is a powerhouse when it comes to leveraging technology to streamline processes and boost productivity.",
        full_quote: "I've had the pleasure of working with Sonal, and I can confidently say she is a powerhouse when it comes to leveraging technology to streamline processes and boost productivity. Her expertise in Power Automate has been instrumental in simplifying complex workflows, saving time, and reducing manual effort.\n\nWhat truly sets Sonal apart is her creativity and innovative mindset. She doesn't just solve problems—she reimagines them. Whether it's finding a new way to automate a tedious task or designing a solution that improves cross-functional collaboration, Sonal consistently brings fresh ideas to the table that drive meaningful outcomes.\n\nHer commitment to excellence is evident in everything she does. Sonal goes above and beyond to ensure that her solutions are not only effective but scalable and sustainable. Her drive to promote efficiency and her passion for continuous improvement make her an invaluable asset to any team.",
        author: "Jenn Krieger",
        title: "Senior Leader at PointClickCare",
    },
    Testimonial {
        short_quote: "Sonal is a valuable co-op student on our Digital Customer Success team. She brings a kind and approachable personality to her work and demonstrates a solid foundation in coding and data analysis.",
        full_quote: "Sonal is a valuable co-op student on our Digital Customer Success team. She brings a kind and approachable personality to her work and demonstrates a solid foundation in coding and data analysis.\n\nSonal has shown steady growth in her ability to approach challenges thoughtfully and contribute to team initiatives. Her willingness to learn and collaborate has been appreciated, and I am confident she will continue to bring value to her future endeavors.",
        author: "Christine Steffler",
        title: "Digital Strategy Lead at PointClickCare",
    },
];

pub static CONTACT_PROMPTS: [&str; 3] = ["I'm hiring", "I'm curious", "I like how you think"];

pub const GALLERY_CAPTION: &str = "Street photography";

pub static STREET_PHOTOS: [&str; 91] = [
    "/photos/street1.JPG",
    "/photos/street2.JPG",
    "/photos/street3.JPG",
    "/photos/street4.JPG",
    "/photos/street6.JPG",
    "/photos/street8.JPG",
    "/photos/street9.JPG",
    "/photos/street10.JPG",
    "/photos/street11.JPG",
    "/photos/street12.JPG",
    "/photos/street13.JPG",
    "/photos/street14.JPG",
    "/photos/street15.JPG",
    "/photos/street16.JPG",
    "/photos/street17.JPG",
    "/photos/street18.JPG",
    "/photos/street19.JPG",
    "/photos/street21.JPG",
    "/photos/street22.JPG",
    "/photos/street23.JPG",
    "/photos/street25.JPG",
    "/photos/street26.JPG",
    "/photos/street27.JPG",
    "/photos/street28.JPG",
    "/photos/street29.JPG",
    "/photos/street30.JPG",
    "/photos/street31.JPG",
    "/photos/street32.JPG",
    "/photos/street33.JPG",
    "/photos/street34.JPG",
    "/photos/street35.JPG",
    "/photos/street37.JPG",
    "/photos/street38.JPG",
    "/photos/street39.JPG",
    "/photos/street40.JPG",
    "/photos/street41.JPG",
    "/photos/street42.JPG",
    "/photos/street43.JPG",
    "/photos/street44.JPG",
    "/photos/street45.JPG",
    "/photos/street46.JPG",
    "/photos/street47.JPG",
    "/photos/street48.JPG",
    "/photos/street49.JPG",
    "/photos/street50.JPG",
    "/photos/street51.JPG",
    "/photos/street52.JPG",
    "/photos/street53.JPG",
    "/photos/street54.JPG",
    "/photos/street55.JPG",
    "/photos/street56.JPG",
    "/photos/street57.JPG",
    "/photos/street58.JPG",
    "/photos/street59.JPG",
    "/photos/street60.JPG",
    "/photos/street61.JPG",
    "/photos/street62.JPG",
    "/photos/street63.JPG",
    "/photos/street64.JPG",
    "/photos/street65.JPG",
    "/photos/street67.JPG",
    "/photos/street68.JPG",
    "/photos/street69.JPG",
    "/photos/street70.JPG",
    "/photos/street71.JPG",
    "/photos/street72.JPG",
    "/photos/street73.JPG",
    "/photos/street75.JPG",
    "/photos/street76.JPG",
    "/photos/street77.JPG",
    "/photos/street78.JPG",
    "/photos/street79.JPG",
    "/photos/street80.JPG",
    "/photos/street81.JPG",
    "/photos/street82.JPG",
    "/photos/street83.JPG",
    "/photos/street84.JPG",
    "/photos/street85.JPG",
    "/photos/street86.JPG",
    "/photos/street87.JPG",
    "/photos/street88.JPG",
    "/photos/street89.JPG",
    "/photos/street90.JPG",
    "/photos/street91.JPG",
    "/photos/street92.JPG",
    "/photos/street93.JPG",
    "/photos/street94.JPG",
    "/photos/street96.JPG",
    "/photos/street99.JPG",
    "/photos/street100.JPG",
    "/photos/street136.JPG",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_are_populated() {
        assert!(!HEADLINES.is_empty());
        assert!(!STREET_PHOTOS.is_empty());
        assert_eq!(CASE_STEPS.len(), 6);
    }

    #[test]
    fn every_card_has_tools_and_impact() {
        for role in &ROLES {
            assert!(!role.tools.is_empty(), "{} has no tools", role.title);
            assert!(!role.impact.is_empty(), "{} has no impact", role.title);
        }
        for auto in &AUTOMATIONS {
            assert!(!auto.tools.is_empty(), "{} has no tools", auto.title);
            assert!(!auto.problem.is_empty(), "{} has no problem", auto.title);
            assert!(!auto.impact.is_empty(), "{} has no impact", auto.title);
        }
        for project in &PROJECTS {
            assert!(!project.tools.is_empty(), "{} has no tools", project.title);
        }
        for story in &STORIES {
            assert!(
                !story.how_it_works.is_empty(),
                "{} has no steps",
                story.title
            );
        }
    }

    #[test]
    fn full_quotes_extend_short_quotes() {
        for t in &TESTIMONIALS {
            assert!(t.full_quote.starts_with(t.short_quote), "{}", t.author);
        }
    }

    #[test]
    fn counters_terminate() {
        assert!(HOURS_SAVED.target > 0 && HOURS_SAVED.step_ms > 0);
        assert!(DAYS_SAVED.target > 0 && DAYS_SAVED.step_ms > 0);
    }
}
