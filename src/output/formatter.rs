//! Output formatters for analyses and history

use crate::analysis::entry::AnalysisEntry;
use crate::analysis::scoring::Confidence;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use askama::Template;
use chrono::{DateTime, Utc};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting prep reports
pub trait OutputFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for notes and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Plain-text export
pub struct TextFormatter;

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
    text_formatter: TextFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Placement Prep: {{ role }} at {{ company }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .round {
            background: #f8f9fa;
            padding: 12px 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #007acc;
        }
        .skill {
            display: inline-block;
            padding: 4px 12px;
            margin: 3px;
            border-radius: 14px;
            font-size: 0.9em;
        }
        .skill-know { background: #007acc; color: white; }
        .skill-practice { background: #e9ecef; color: #6c757d; }
        .plan {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 15px;
        }
        .plan-day {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
        }
        .plan-day h4 { margin-top: 0; color: #007acc; }
        .weak {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #ffc107;
        }
        ul { margin: 10px 0; }
        li { margin: 5px 0; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🎯 Placement Prep Analysis</h1>
            <p>{{ role }} at {{ company }} | {{ size }} | {{ industry }}</p>
        </div>

        <div class="section">
            <h2>Readiness</h2>
            <h3>Score: {{ score }}/100 <span class="score-badge {{ score_class }}">{{ readiness }}</span></h3>
            <p><strong>Hiring focus:</strong> {{ focus }}</p>
            <div class="weak">
                <strong>Focus on your weakest areas:</strong>
                {% if weak_areas.is_empty() %}All good!{% else %}{{ weak_areas.join(", ") }}{% endif %}
            </div>
        </div>

        <div class="section">
            <h2>Predicted Interview Flow</h2>
            {% for round in rounds %}
            <div class="round">
                <strong>{{ round.stage }}: {{ round.name }}</strong>
                <p>{{ round.description }}</p>
            </div>
            {% endfor %}
        </div>

        <div class="section">
            <h2>Skills</h2>
            {% for skill in skills %}
            <span class="skill skill-{{ skill.confidence }}">{{ skill.skill }}</span>
            {% endfor %}
        </div>

        <div class="section">
            <h2>7-Day Study Plan</h2>
            <div class="plan">
                {% for day in plan %}
                <div class="plan-day">
                    <h4>{{ day.day }}: {{ day.focus }}</h4>
                    <ul>
                        {% for task in day.tasks %}<li>{{ task }}</li>{% endfor %}
                    </ul>
                </div>
                {% endfor %}
            </div>
        </div>

        <div class="section">
            <h2>Round Checklist</h2>
            {% for round in checklist %}
            <h4>{{ round.round }}</h4>
            <ul>
                {% for item in round.items %}<li>{{ item }}</li>{% endfor %}
            </ul>
            {% endfor %}
        </div>

        <div class="section">
            <h2>Likely Questions</h2>
            <ol>
                {% for question in questions %}<li>{{ question }}</li>{% endfor %}
            </ol>
        </div>

        <div class="metadata">
            <p><strong>ℹ️ Generated by placement-prep v{{ version }}</strong> on {{ generated_at }}</p>
            <p><strong>Analysis:</strong> {{ id }} | <strong>Analyzed:</strong> {{ analyzed_at }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    role: &'a str,
    company: &'a str,
    size: String,
    industry: &'a str,
    focus: &'a str,
    score: u8,
    score_class: &'static str,
    readiness: &'static str,
    weak_areas: &'a [String],
    rounds: &'a [crate::analysis::rounds::RoundInfo],
    skills: &'a [SkillRating],
    plan: &'a [crate::analysis::plan::PlanDay],
    checklist: &'a [crate::analysis::checklist::ChecklistRound],
    questions: &'a [String],
    version: &'a str,
    generated_at: String,
    analyzed_at: String,
    id: &'a str,
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, level: ReadinessLevel) -> String {
        let color = match level {
            ReadinessLevel::Ready => Color::Green,
            ReadinessLevel::Close => Color::BrightGreen,
            ReadinessLevel::Developing => Color::Yellow,
            ReadinessLevel::EarlyStage => Color::BrightRed,
        };
        let badge = level.label().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_skill(&self, rating: &SkillRating) -> String {
        match rating.confidence {
            Confidence::Know if self.use_colors => format!("✔ {}", rating.skill.color(Color::Cyan).bold()),
            Confidence::Know => format!("[x] {}", rating.skill),
            Confidence::Practice if self.use_colors => format!("○ {}", rating.skill.color(Color::BrightBlack)),
            Confidence::Practice => format!("[ ] {}", rating.skill),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String> {
        let entry = &report.analysis;
        let intel = report.intel();
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 PLACEMENT PREP ANALYSIS", 1));
        output.push_str(&format!("{} at {} ({} | {})\n",
            self.colorize(entry.display_role(), Color::White),
            self.colorize(entry.display_company(), Color::White),
            intel.size,
            intel.industry
        ));
        output.push_str(&format!("Analysis: {} | Analyzed: {}\n",
            entry.id,
            format_timestamp(&report.metadata.analyzed_at)
        ));

        output.push_str(&self.format_header("Readiness", 2));
        output.push_str(&format!("Live Score: {}/100 {}\n",
            report.summary.score,
            self.format_score_badge(report.summary.readiness)
        ));
        if self.detailed {
            output.push_str(&format!("Base Score: {}/100 | Known skills: {}/{}\n",
                report.summary.base_score,
                report.summary.known_skills,
                report.summary.total_skills
            ));
        }
        output.push_str(&format!("Hiring Focus: {}\n", self.colorize(&intel.focus, Color::Cyan)));
        let weak = if report.summary.weak_areas.is_empty() {
            "All good!".to_string()
        } else {
            report.summary.weak_areas.join(", ")
        };
        output.push_str(&format!("Weakest Areas: {}\n", self.colorize(&weak, Color::Yellow)));

        output.push_str(&self.format_header("🗺️ Predicted Interview Flow", 2));
        for round in &entry.round_mapping {
            output.push_str(&format!("{} {}\n",
                self.colorize(&format!("{}:", round.stage), Color::Blue),
                round.name
            ));
            output.push_str(&format!("   {}\n", self.colorize(&round.description, Color::BrightBlack)));
        }

        output.push_str(&self.format_header("🧠 Skill Self-Assessment", 2));
        let mut current = None;
        for rating in &report.skill_ratings {
            if current != Some(rating.category) {
                output.push_str(&format!("{}\n", self.colorize(rating.category.label(), Color::Yellow)));
                current = Some(rating.category);
            }
            output.push_str(&format!("  {}\n", self.format_skill(rating)));
        }

        output.push_str(&self.format_header("📅 7-Day Study Plan", 2));
        for day in &entry.plan_7_days {
            output.push_str(&format!("{} {}\n",
                self.colorize(&format!("{}:", day.day), Color::Green),
                day.focus
            ));
            for task in &day.tasks {
                output.push_str(&format!("  • {}\n", task));
            }
        }

        output.push_str(&self.format_header("✅ Round Checklist", 2));
        for round in &entry.checklist {
            output.push_str(&format!("{}\n", self.colorize(&round.round, Color::Green)));
            for item in &round.items {
                output.push_str(&format!("  [ ] {}\n", item));
            }
        }

        output.push_str(&self.format_header("❓ Likely Questions", 2));
        for (i, question) in entry.questions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, question));
        }

        if self.detailed {
            output.push_str(&self.format_header("Job Description", 3));
            output.push_str(&format!("{}\n", self.colorize(entry.jd_text.trim(), Color::BrightBlack)));
        }

        output.push_str(&format!("\n{} Generated by placement-prep v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.tool_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(level: ReadinessLevel) -> String {
        let dot = match level {
            ReadinessLevel::Ready => "🟢",
            ReadinessLevel::Close => "🟡",
            ReadinessLevel::Developing => "🟠",
            ReadinessLevel::EarlyStage => "🔴",
        };
        format!("{} {}", dot, level.label())
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String> {
        let entry = &report.analysis;
        let intel = report.intel();
        let mut output = String::new();

        output.push_str(&format!("# 🎯 Placement Prep: {} at {}\n\n",
            entry.display_role(),
            entry.display_company()
        ));
        output.push_str(&format!("**Company:** {} ({}, {})  \n", entry.display_company(), intel.size, intel.industry));
        output.push_str(&format!("**Score:** {}/100 {}  \n",
            report.summary.score,
            Self::markdown_score_badge(report.summary.readiness)
        ));
        output.push_str(&format!("**Hiring focus:** {}\n\n", intel.focus));

        output.push_str("## Predicted Interview Flow\n\n");
        output.push_str("| Stage | Round | What to expect |\n|---|---|---|\n");
        for round in &entry.round_mapping {
            output.push_str(&format!("| {} | {} | {} |\n", round.stage, round.name, round.description));
        }

        output.push_str("\n## Skills\n\n");
        for rating in &report.skill_ratings {
            let mark = if rating.confidence == Confidence::Know { "x" } else { " " };
            output.push_str(&format!("- [{}] {} _({})_\n", mark, rating.skill, rating.category.label()));
        }
        if !report.summary.weak_areas.is_empty() {
            output.push_str(&format!("\n**Weakest areas:** {}\n", report.summary.weak_areas.join(", ")));
        }

        output.push_str("\n## 7-Day Study Plan\n\n");
        for day in &entry.plan_7_days {
            output.push_str(&format!("### {}: {}\n\n", day.day, day.focus));
            for task in &day.tasks {
                output.push_str(&format!("- {}\n", task));
            }
            output.push('\n');
        }

        output.push_str("## Round Checklist\n\n");
        for round in &entry.checklist {
            output.push_str(&format!("### {}\n\n", round.round));
            for item in &round.items {
                output.push_str(&format!("- [ ] {}\n", item));
            }
            output.push('\n');
        }

        output.push_str("## Likely Questions\n\n");
        for (i, question) in entry.questions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, question));
        }

        if self.include_metadata {
            output.push_str("\n---\n\n");
            output.push_str(&format!("*Generated by placement-prep v{} on {} | Analysis `{}`*\n",
                report.metadata.tool_version,
                format_timestamp(&report.metadata.generated_at),
                entry.id
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn score_class(level: ReadinessLevel) -> &'static str {
        match level {
            ReadinessLevel::Ready => "score-excellent",
            ReadinessLevel::Close => "score-good",
            ReadinessLevel::Developing => "score-fair",
            ReadinessLevel::EarlyStage => "score-poor",
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String> {
        let entry = &report.analysis;
        let intel = report.intel();

        let template = HtmlTemplate {
            include_styles: self.include_styles,
            role: entry.display_role(),
            company: entry.display_company(),
            size: intel.size.to_string(),
            industry: &intel.industry,
            focus: &intel.focus,
            score: report.summary.score,
            score_class: Self::score_class(report.summary.readiness),
            readiness: report.summary.readiness.label(),
            weak_areas: &report.summary.weak_areas,
            rounds: &entry.round_mapping,
            skills: &report.skill_ratings,
            plan: &entry.plan_7_days,
            checklist: &entry.checklist,
            questions: &entry.questions,
            version: &report.metadata.tool_version,
            generated_at: format_timestamp(&report.metadata.generated_at),
            analyzed_at: format_timestamp(&report.metadata.analyzed_at),
            id: &entry.id,
        };

        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String> {
        Ok(export_text(report))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
            text_formatter: TextFormatter,
        }
    }

    pub fn generate_report(&self, report: &PrepReport, format: &OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
            OutputFormat::Text => &self.text_formatter,
        };
        log::debug!("Formatting report as {:?}", formatter.supports_format());
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Rough "how long ago" wording for history listings.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    };

    if minutes < 1 {
        "less than a minute ago".to_string()
    } else if hours < 1 {
        plural(minutes, "minute")
    } else if days < 1 {
        format!("about {}", plural(hours, "hour"))
    } else if days < 30 {
        plural(days, "day")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

/// One line per saved analysis: short id, role, company, age, score.
pub fn format_history(entries: &[AnalysisEntry], use_colors: bool, now: DateTime<Utc>) -> String {
    let colorize = |text: &str, color: Color| {
        if use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    };

    let mut output = String::new();
    for entry in entries {
        let short_id: String = entry.id.chars().take(8).collect();
        output.push_str(&format!("{}  {} @ {}  {}  {}\n",
            colorize(&short_id, Color::BrightBlack),
            colorize(entry.display_role(), Color::White),
            entry.display_company(),
            colorize(&relative_time(entry.created_at_utc(), now), Color::BrightBlack),
            colorize(&format!("{}/100", entry.final_score), Color::Cyan)
        ));
    }
    output
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// `Analysis_<company>.<ext>`, with `Job` standing in for a blank company.
pub fn suggest_filename(format: &OutputFormat, company: &str) -> String {
    let trimmed = company.trim();
    let name = if trimmed.is_empty() { "Job" } else { trimmed };
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') { '_' } else { c })
        .collect();
    format!("Analysis_{}.{}", safe, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::analyze_jd;
    use chrono::Duration;

    fn report() -> PrepReport {
        let mut entry = analyze_jd("Google", "SDE", "DSA, Java and System Design <script>");
        entry.set_confidence("Java", Confidence::Know);
        PrepReport::from_entry(&entry)
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_report(&report()).unwrap();
        assert!(output.contains("PLACEMENT PREP ANALYSIS"));
        assert!(output.contains("SDE at Google (Enterprise | Technology Services)"));
        assert!(output.contains("[x] Java"));
        assert!(output.contains("[ ] DSA"));
        assert!(output.contains("Base Score:"));
    }

    #[test]
    fn test_json_carries_persisted_schema() {
        let output = JsonFormatter::new(false).format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["analysis"]["companyIntel"]["size"], "Enterprise");
        assert_eq!(value["skillRatings"][0]["category"], "coreCS");
        assert!(value["summary"]["score"].is_number());
    }

    #[test]
    fn test_markdown_sections() {
        let output = MarkdownFormatter::new(false).format_report(&report()).unwrap();
        assert!(output.starts_with("# 🎯 Placement Prep: SDE at Google"));
        assert!(output.contains("| Round 1 | Online Assessment |"));
        assert!(output.contains("- [x] Java"));
        assert!(!output.contains("Generated by"));
    }

    #[test]
    fn test_html_escapes_and_lists() {
        let output = HtmlFormatter::new(false).format_report(&report()).unwrap();
        assert!(output.contains("<title>Placement Prep: SDE at Google</title>"));
        assert!(output.contains("skill skill-know"));
        assert!(!output.contains("<style>"));
        assert!(output.contains("<ol>"));
    }

    #[test]
    fn test_generator_dispatch_text() {
        let generator = ReportGenerator::with_options(false, false, true, true, true);
        let output = generator.generate_report(&report(), &OutputFormat::Text).unwrap();
        assert!(output.starts_with("PLACEMENT PREP ANALYSIS"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Text, "Acme"), "Analysis_Acme.txt");
        assert_eq!(suggest_filename(&OutputFormat::Html, "  "), "Analysis_Job.html");
        assert_eq!(suggest_filename(&OutputFormat::Json, "A/B"), "Analysis_A_B.json");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "less than a minute ago");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(1), now), "about 1 hour ago");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
    }

    #[test]
    fn test_history_listing_placeholders() {
        let entry = analyze_jd("", "", "Kafka");
        let output = format_history(&[entry.clone()], false, entry.created_at_utc());
        assert!(output.contains("Unknown Role @ Unknown Company"));
        assert!(output.contains(&format!("{}/100", entry.final_score)));
    }
}
