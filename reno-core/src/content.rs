//! Typed marketing-site content.
//!
//! Every editable field of the marketing page is declared here so structural
//! mistakes fail at compile time instead of at a runtime path lookup. Each
//! section's `Default` carries the stock marketing copy.

use serde::{Deserialize, Serialize};

/// Hero banner at the top of the marketing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSection {
    /// Small badge above the headline.
    pub badge: String,
    /// First, plain part of the headline.
    pub headline_part1: String,
    /// Second, highlighted part of the headline.
    pub headline_part2: String,
    /// Supporting copy under the headline.
    pub subheadline: String,
    /// Call-to-action button label.
    pub cta_text: String,
    /// Short benefit bullets.
    pub benefits: Vec<String>,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            badge: "AI-Powered Visualization".to_string(),
            headline_part1: "Close more renovation jobs with".to_string(),
            headline_part2: "instant after photos".to_string(),
            subheadline: "Turn a phone photo of any room into a photorealistic renovation \
                          preview your client can approve on the spot."
                .to_string(),
            cta_text: "Start Free Trial".to_string(),
            benefits: vec![
                "No design software required".to_string(),
                "Results in under a minute".to_string(),
                "Print-ready client proposals".to_string(),
            ],
        }
    }
}

/// Embedded demo video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSection {
    /// Section title.
    pub title: String,
    /// Video URL.
    pub url: String,
    /// Poster image URL.
    pub poster: String,
}

impl Default for VideoSection {
    fn default() -> Self {
        Self {
            title: "See it in action".to_string(),
            url: "https://cdn.renoviz.app/demo.mp4".to_string(),
            poster: "https://cdn.renoviz.app/demo-poster.jpg".to_string(),
        }
    }
}

/// One step of the "how it works" walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowItWorksStep {
    /// Step title.
    pub title: String,
    /// Step description.
    pub desc: String,
}

impl HowItWorksStep {
    fn new(title: &str, desc: &str) -> Self {
        Self {
            title: title.to_string(),
            desc: desc.to_string(),
        }
    }
}

/// "How it works" walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowItWorksSection {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// Ordered walkthrough steps.
    pub steps: Vec<HowItWorksStep>,
}

impl Default for HowItWorksSection {
    fn default() -> Self {
        Self {
            title: "How it works".to_string(),
            subtitle: "Three steps from job-site photo to signed quote.".to_string(),
            steps: vec![
                HowItWorksStep::new(
                    "Snap the before photo",
                    "Capture the space as it is today, right from your phone.",
                ),
                HowItWorksStep::new(
                    "Describe the renovation",
                    "Type it, dictate it, or let the AI suggest a plan.",
                ),
                HowItWorksStep::new(
                    "Share the after",
                    "Refine the visualization and export a two-page proposal.",
                ),
            ],
        }
    }
}

/// One product feature card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Emoji or icon identifier.
    pub icon: String,
    /// Feature title.
    pub title: String,
    /// Feature description.
    pub desc: String,
}

impl FeatureItem {
    fn new(icon: &str, title: &str, desc: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            desc: desc.to_string(),
        }
    }
}

/// Feature grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesSection {
    /// Section title.
    pub title: String,
    /// Feature cards.
    pub items: Vec<FeatureItem>,
}

impl Default for FeaturesSection {
    fn default() -> Self {
        Self {
            title: "Built for contractors".to_string(),
            items: vec![
                FeatureItem::new(
                    "📸",
                    "Photo-accurate previews",
                    "Generated afters keep your client's actual room geometry.",
                ),
                FeatureItem::new(
                    "🧱",
                    "Materials library",
                    "Reuse your go-to finishes across every project.",
                ),
                FeatureItem::new(
                    "📄",
                    "One-click proposals",
                    "Before/after, scope of work, and inclusions in a printable document.",
                ),
            ],
        }
    }
}

/// Use-case list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCasesSection {
    /// Section title.
    pub title: String,
    /// Use-case labels.
    pub items: Vec<String>,
}

impl Default for UseCasesSection {
    fn default() -> Self {
        Self {
            title: "Works for every trade".to_string(),
            items: vec![
                "Kitchen remodels".to_string(),
                "Bathroom renovations".to_string(),
                "Basement finishing".to_string(),
                "Exterior refreshes".to_string(),
            ],
        }
    }
}

/// Pricing section header (plans themselves are managed separately).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSection {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
}

impl Default for PricingSection {
    fn default() -> Self {
        Self {
            title: "Simple pricing".to_string(),
            subtitle: "Pick a plan; upgrade when the jobs roll in.".to_string(),
        }
    }
}

/// One customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Quoted text.
    pub quote: String,
    /// Who said it.
    pub author: String,
    /// Their company or trade.
    pub company: String,
}

/// Testimonial strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialsSection {
    /// Section title.
    pub title: String,
    /// Testimonials.
    pub items: Vec<Testimonial>,
}

impl Default for TestimonialsSection {
    fn default() -> Self {
        Self {
            title: "Contractors close faster".to_string(),
            items: vec![Testimonial {
                quote: "Clients sign the same day they see the after photo.".to_string(),
                author: "Mike Builder".to_string(),
                company: "Builder & Sons Remodeling".to_string(),
            }],
        }
    }
}

/// One FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

impl FaqItem {
    fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// FAQ section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqSection {
    /// Section title.
    pub title: String,
    /// Question/answer pairs.
    pub items: Vec<FaqItem>,
}

impl Default for FaqSection {
    fn default() -> Self {
        Self {
            title: "Frequently asked questions".to_string(),
            items: vec![
                FaqItem::new(
                    "Do I need design experience?",
                    "No. Describe the work in plain language and the AI handles the rest.",
                ),
                FaqItem::new(
                    "Can I edit a generated image?",
                    "Yes. Type a refinement like \"make the counters darker\" and the image \
                     updates in place.",
                ),
            ],
        }
    }
}

/// Footer call-to-action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
    /// Closing headline.
    pub headline: String,
    /// Closing subheadline.
    pub subheadline: String,
    /// Call-to-action button label.
    pub cta_text: String,
}

impl Default for FooterSection {
    fn default() -> Self {
        Self {
            headline: "Ready to win your next bid?".to_string(),
            subheadline: "Join contractors closing jobs with instant visualizations.".to_string(),
            cta_text: "Get Started".to_string(),
        }
    }
}

/// Search-engine metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoSection {
    /// Page title tag.
    pub meta_title: String,
    /// Meta description.
    pub meta_description: String,
}

impl Default for SeoSection {
    fn default() -> Self {
        Self {
            meta_title: "Renoviz - AI renovation visualization for contractors".to_string(),
            meta_description: "Turn before photos into photorealistic renovation previews and \
                               print-ready proposals."
                .to_string(),
        }
    }
}

/// The complete marketing-site content tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Hero banner.
    pub hero: HeroSection,
    /// Demo video.
    pub video: VideoSection,
    /// "How it works" walkthrough.
    pub how_it_works: HowItWorksSection,
    /// Feature grid.
    pub features: FeaturesSection,
    /// Use-case list.
    pub use_cases: UseCasesSection,
    /// Pricing header.
    pub pricing: PricingSection,
    /// Testimonial strip.
    pub testimonials: TestimonialsSection,
    /// FAQ.
    pub faq: FaqSection,
    /// Footer call-to-action.
    pub footer: FooterSection,
    /// SEO metadata.
    pub seo: SeoSection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_round_trips_through_json() {
        let content = SiteContent::default();
        let json = serde_json::to_string(&content).expect("serialize");
        let back: SiteContent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, content);
    }

    #[test]
    fn test_default_content_is_populated() {
        let content = SiteContent::default();
        assert!(!content.hero.benefits.is_empty());
        assert_eq!(content.how_it_works.steps.len(), 3);
        assert!(!content.faq.items.is_empty());
    }

    #[test]
    fn test_sections_are_independently_editable() {
        let hero = HeroSection {
            cta_text: "Book a Demo".to_string(),
            ..HeroSection::default()
        };
        let content = SiteContent {
            hero,
            ..SiteContent::default()
        };
        assert_eq!(content.hero.cta_text, "Book a Demo");
        assert_eq!(content.footer, FooterSection::default());
    }
}
