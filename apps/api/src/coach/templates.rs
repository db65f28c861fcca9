//! Template Renderer — turns a classification into advice prose.
//!
//! Industry and stage advice come from static records with five named slots.
//! Industries without a dedicated record render the technology record under
//! their own heading.

use crate::coach::classifier::{CareerStage, Classification, Industry};
use crate::models::profile::UserProfile;

/// Static advice content for one industry or career stage.
#[derive(Debug)]
pub struct AdviceRecord {
    pub trends: &'static str,
    pub skills: &'static str,
    pub growth: &'static str,
    pub certifications: &'static str,
    pub salary: &'static str,
}

const TECHNOLOGY_ADVICE: AdviceRecord = AdviceRecord {
    trends: "Cloud-native platforms, AI-assisted development, and platform engineering are \
        reshaping most software teams.",
    skills: "A modern language (Python, TypeScript, Go, or Rust), cloud services, CI/CD, \
        and solid system design fundamentals.",
    growth: "Demand for software roles remains strong, with the fastest growth in cloud, \
        AI integration, and developer tooling.",
    certifications: "AWS Certified Solutions Architect, Google Cloud Professional, \
        Certified Kubernetes Administrator.",
    salary: "$70,000 - $180,000+ depending on level, location, and specialization.",
};

const INDUSTRY_ADVICE: &[(Industry, AdviceRecord)] = &[
    (Industry::Technology, TECHNOLOGY_ADVICE),
    (
        Industry::Cybersecurity,
        AdviceRecord {
            trends: "Zero-trust architectures, cloud security, and AI-driven threat detection \
                are top priorities as attacks grow more sophisticated.",
            skills: "Networking fundamentals, Linux, incident response, threat hunting, \
                penetration testing, and scripting in Python or PowerShell.",
            growth: "Security roles are projected to grow far faster than average, with a \
                persistent global talent shortage.",
            certifications: "CompTIA Security+, CISSP, CEH, OSCP.",
            salary: "$75,000 - $160,000+; senior and specialized roles earn considerably more.",
        },
    ),
    (
        Industry::DataScience,
        AdviceRecord {
            trends: "Generative AI, MLOps, and real-time analytics are moving models from \
                notebooks into production systems.",
            skills: "Python, SQL, statistics, machine learning frameworks, data visualization, \
                and communicating results to non-technical audiences.",
            growth: "Data and ML roles continue to expand across every industry, not just tech.",
            certifications: "Google Professional Data Engineer, AWS Machine Learning Specialty, \
                TensorFlow Developer Certificate.",
            salary: "$80,000 - $170,000+ depending on seniority and specialization.",
        },
    ),
    (
        Industry::Healthcare,
        AdviceRecord {
            trends: "Telehealth, health informatics, and value-based care are changing how \
                providers deliver and measure care.",
            skills: "Clinical expertise, electronic health record systems, patient communication, \
                and regulatory compliance.",
            growth: "Healthcare is among the fastest-growing sectors, driven by aging populations.",
            certifications: "Role-specific licensure, CPHIMS for informatics, BLS/ACLS for \
                clinical roles.",
            salary: "$50,000 - $150,000+ with wide variation by role and licensure.",
        },
    ),
    (
        Industry::Finance,
        AdviceRecord {
            trends: "Fintech, automation of routine analysis, and ESG investing are reshaping \
                financial services.",
            skills: "Financial modeling, Excel, SQL or Python for analysis, risk management, \
                and regulatory knowledge.",
            growth: "Steady demand, with the strongest growth in fintech, analytics, and compliance.",
            certifications: "CFA, CPA, FRM, Series licenses for advisory roles.",
            salary: "$60,000 - $160,000+; investment roles add significant bonus potential.",
        },
    ),
    (
        Industry::Marketing,
        AdviceRecord {
            trends: "Data-driven marketing, content creation at scale, and privacy-first \
                targeting are redefining the field.",
            skills: "Analytics, SEO/SEM, content strategy, marketing automation, and copywriting.",
            growth: "Digital marketing roles keep growing as budgets shift online.",
            certifications: "Google Analytics, HubSpot Inbound Marketing, Meta Blueprint.",
            salary: "$50,000 - $130,000+ depending on specialization and seniority.",
        },
    ),
    (
        Industry::Education,
        AdviceRecord {
            trends: "Blended learning, education technology, and skills-based credentials are \
                expanding where teaching happens.",
            skills: "Curriculum design, classroom and online facilitation, assessment design, \
                and learning technology.",
            growth: "Stable demand in schools, with faster growth in corporate training and edtech.",
            certifications: "State teaching licensure, ATD Certified Professional in Talent \
                Development, instructional design certificates.",
            salary: "$45,000 - $100,000+; corporate learning roles tend to pay more.",
        },
    ),
    (
        Industry::Engineering,
        AdviceRecord {
            trends: "Sustainability, automation, and digital twins are transforming traditional \
                engineering disciplines.",
            skills: "CAD tools, simulation software, project management, and domain-specific \
                technical knowledge.",
            growth: "Solid demand, especially in renewable energy, infrastructure, and manufacturing.",
            certifications: "Professional Engineer (PE), PMP, Six Sigma.",
            salary: "$65,000 - $140,000+ depending on discipline and licensure.",
        },
    ),
    (
        Industry::Design,
        AdviceRecord {
            trends: "Design systems, accessibility, and AI-assisted prototyping are raising the \
                bar for product teams.",
            skills: "User research, interaction design, Figma, prototyping, and accessibility \
                standards.",
            growth: "Product and UX design roles grow alongside digital products in every sector.",
            certifications: "Google UX Design Certificate, Nielsen Norman Group UX Certification.",
            salary: "$60,000 - $150,000+ depending on level and company.",
        },
    ),
    (
        Industry::Sales,
        AdviceRecord {
            trends: "Social selling, revenue operations, and AI-assisted prospecting are changing \
                how deals get done.",
            skills: "Consultative selling, CRM tools, negotiation, pipeline management, and \
                product knowledge.",
            growth: "Consistent demand; technical and enterprise sales offer the highest ceilings.",
            certifications: "Salesforce Administrator, HubSpot Sales Software, Sandler or \
                Challenger training.",
            salary: "$50,000 - $200,000+ including commission.",
        },
    ),
];

const ENTRY_STAGE_ADVICE: AdviceRecord = AdviceRecord {
    trends: "Build a strong foundation: say yes to learning opportunities, ask questions, \
        and find a mentor early.",
    skills: "Core technical skills for your field, clear written communication, and \
        reliable follow-through.",
    growth: "Aim to own a small project end to end within your first year.",
    certifications: "Entry-level credentials that prove fundamentals, such as CompTIA, Google \
        career certificates, or your field's associate certification.",
    salary: "Entry-level salaries vary widely; research local ranges and negotiate even \
        your first offer.",
};

const MID_STAGE_ADVICE: AdviceRecord = AdviceRecord {
    trends: "Deepen your expertise in one area while broadening your understanding of the \
        business around it.",
    skills: "Project leadership, mentoring others, stakeholder communication, and \
        strategic thinking.",
    growth: "Decide between a specialist track and a management track, then seek work that \
        builds toward it.",
    certifications: "Advanced certifications in your specialty, or PMP if you are moving toward \
        project leadership.",
    salary: "Mid-level professionals often see their largest raises by changing roles or \
        companies.",
};

const EXECUTIVE_STAGE_ADVICE: AdviceRecord = AdviceRecord {
    trends: "Focus on vision, organizational health, and building leaders beneath you.",
    skills: "Strategic planning, financial acumen, executive communication, and change \
        management.",
    growth: "Board exposure, cross-functional leadership, and industry visibility open the \
        next doors.",
    certifications: "Executive education programs, an MBA, or board governance courses.",
    salary: "Executive compensation is heavily weighted toward equity and performance bonuses.",
};

fn stage_advice(stage: CareerStage) -> &'static AdviceRecord {
    match stage {
        CareerStage::Entry => &ENTRY_STAGE_ADVICE,
        CareerStage::Mid => &MID_STAGE_ADVICE,
        CareerStage::Executive => &EXECUTIVE_STAGE_ADVICE,
    }
}

/// Dedicated record for `industry`, or the technology record when none exists.
pub fn industry_advice(industry: Industry) -> &'static AdviceRecord {
    INDUSTRY_ADVICE
        .iter()
        .find(|(i, _)| *i == industry)
        .map(|(_, record)| record)
        .unwrap_or(&TECHNOLOGY_ADVICE)
}

const QUESTION_RESPONSE: &str = "That's a great question. Every career path is different, \
    so the best answer depends on your goals, strengths, and circumstances.\n\n\
    Here's a useful way to think it through:\n\
    - **Clarify the goal:** what would success look like a year from now?\n\
    - **Gather evidence:** talk to people already doing what you want to do.\n\
    - **Run small experiments:** a course, a side project, or an informational interview.\n\
    - **Reflect and adjust:** keep what energizes you, drop what doesn't.\n\n\
    Tell me more about your industry or experience level and I can be more specific.";

const GENERAL_RESPONSE: &str = "I'm here to help you grow your career. I can help with:\n\n\
    - **Industry insights:** trends, in-demand skills, and salary ranges\n\
    - **Career stages:** advice for entry-level, mid-career, and executive professionals\n\
    - **Skill development:** what to learn next and which certifications matter\n\
    - **Job search:** resumes, interviews, networking, and negotiation\n\n\
    What would you like to focus on? Keep going, every step forward counts.";

/// Renders the response prose for `classification`. Always non-empty.
pub fn render(classification: &Classification, profile: &UserProfile) -> String {
    match classification {
        Classification::Industry(industry) => render_industry(*industry, profile),
        Classification::Stage(stage) => render_stage(*stage, profile),
        Classification::Skill => render_skill(profile),
        Classification::Question => QUESTION_RESPONSE.to_string(),
        Classification::General => GENERAL_RESPONSE.to_string(),
    }
}

fn render_sections(out: &mut String, record: &AdviceRecord, headings: [&str; 5]) {
    let slots = [
        record.trends,
        record.skills,
        record.growth,
        record.certifications,
        record.salary,
    ];
    for (heading, body) in headings.iter().zip(slots) {
        out.push_str(&format!("**{heading}:** {body}\n\n"));
    }
}

fn render_industry(industry: Industry, profile: &UserProfile) -> String {
    let record = industry_advice(industry);
    let mut out = format!("**{} Career Insights**\n\n", industry.display_name());
    render_sections(
        &mut out,
        record,
        [
            "Current Trends",
            "In-Demand Skills",
            "Growth Outlook",
            "Recommended Certifications",
            "Salary Range",
        ],
    );

    let note = match (profile.target_role(), profile.current_role()) {
        (Some(target), _) => format!(
            "Since you're aiming for {target}, focus first on the skills above that appear \
             most often in {target} job descriptions."
        ),
        (None, Some(current)) => format!(
            "Coming from {current}, look for the overlap between your current work and the \
             skills above; that's your strongest bridge into {}.",
            industry.display_name().to_lowercase()
        ),
        (None, None) => "Pick one skill from the list above and build a small project or \
            credential around it this month."
            .to_string(),
    };
    out.push_str(&note);
    out
}

fn render_stage(stage: CareerStage, profile: &UserProfile) -> String {
    let record = stage_advice(stage);
    let title = match stage {
        CareerStage::Entry => "Entry-Level",
        CareerStage::Mid => "Mid-Career",
        CareerStage::Executive => "Executive",
    };
    let mut out = format!(
        "**Advice for {title} Professionals**\n\n\
         Your profile lists your experience as {}.\n\n",
        profile.experience_label()
    );
    render_sections(
        &mut out,
        record,
        [
            "Where to Focus",
            "Skills to Build",
            "Growth Path",
            "Certifications Worth Considering",
            "Compensation",
        ],
    );
    out.push_str("Small, consistent steps compound. Pick one area above to work on this week.");
    out
}

fn render_skill(profile: &UserProfile) -> String {
    let mut out = String::from("**Skill Development Plan**\n\n");

    match profile.primary_skill() {
        Some(primary) => out.push_str(&format!(
            "Your strongest asset is {primary}. Go deeper there first: depth in one skill \
             makes every adjacent skill easier to learn.\n\n"
        )),
        None => out.push_str(
            "Start by choosing one core skill to anchor your growth; depth in one area makes \
             every adjacent skill easier to learn.\n\n",
        ),
    }

    let skills = profile.listed_skills();
    if !skills.is_empty() {
        out.push_str(&format!(
            "You already list: {}. Look for the skill that connects these to the roles \
             you want.\n\n",
            skills.join(", ")
        ));
    }

    out.push_str(
        "- **Learn by building:** apply every course to a real project.\n\
         - **Prove it:** add a certification only when employers in your target roles ask for it.\n\
         - **Teach it:** writing or mentoring about a skill cements it.\n\
         - **Review quarterly:** compare your skills against current job postings.",
    );
    out
}
