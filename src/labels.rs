// src/labels.rs
//! Localized placeholder and heading strings used by the renderers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    /// Lenient parse for env/config values; unknown tags fall back to Korean.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Locale::En,
            _ => Locale::Ko,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Ko => &KO,
            Locale::En => &EN,
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }
}

#[derive(Debug)]
pub struct Labels {
    pub no_data: &'static str,
    pub no_results: &'static str,
    /// Fallback for descriptive fields (summary, why now, ...).
    pub unknown: &'static str,
    /// Fallback for judgement fields (market, risks, validation).
    pub uncertain: &'static str,
    pub all_categories: &'static str,
    pub one_liner: &'static str,
    pub summary: &'static str,
    pub why_now: &'static str,
    pub entry_strategy: &'static str,
    pub market: &'static str,
    pub risks: &'static str,
    pub validation_steps: &'static str,
    pub trend: &'static str,
    pub community_top: &'static str,
    pub evidence: &'static str,
    pub sources: &'static str,
    pub rank: &'static str,
    pub score: &'static str,
    pub search_index: &'static str,
    pub last_updated: &'static str,
    pub filter_placeholder: &'static str,
    pub today_heading: &'static str,
    pub list_heading: &'static str,
    pub update_button: &'static str,
    pub reload_button: &'static str,
    pub repo_path_missing: &'static str,
    pub load_failed: &'static str,
}

pub static KO: Labels = Labels {
    no_data: "데이터 없음",
    no_results: "검색 조건에 맞는 아이디어가 없습니다.",
    unknown: "알 수 없습니다",
    uncertain: "확실하지 않음",
    all_categories: "모든 카테고리",
    one_liner: "한줄 요약",
    summary: "설명",
    why_now: "왜 지금",
    entry_strategy: "진입 전략",
    market: "시장",
    risks: "리스크",
    validation_steps: "검증 단계",
    trend: "트렌드",
    community_top: "커뮤니티 상위",
    evidence: "Evidence",
    sources: "출처",
    rank: "순위",
    score: "점수",
    search_index: "검색 지수",
    last_updated: "Last updated: ",
    filter_placeholder: "제목, 카테고리, 태그 검색",
    today_heading: "오늘의 아이디어",
    list_heading: "아이디어 목록",
    update_button: "지금 업데이트",
    reload_button: "새로고침",
    repo_path_missing: "docs/config.json에서 repo_path 설정",
    load_failed: "데이터를 불러오지 못했습니다",
};

pub static EN: Labels = Labels {
    no_data: "No data",
    no_results: "No ideas match the current filter.",
    unknown: "Unknown",
    uncertain: "Uncertain",
    all_categories: "All categories",
    one_liner: "One-liner",
    summary: "Summary",
    why_now: "Why now",
    entry_strategy: "Entry strategy",
    market: "Market",
    risks: "Risks",
    validation_steps: "Validation steps",
    trend: "Trend",
    community_top: "Top community posts",
    evidence: "Evidence",
    sources: "Sources",
    rank: "Rank",
    score: "Score",
    search_index: "Search index",
    last_updated: "Last updated: ",
    filter_placeholder: "Search title, category, tags",
    today_heading: "Today's idea",
    list_heading: "Ideas",
    update_button: "Update now",
    reload_button: "Reload",
    repo_path_missing: "Set repo_path in docs/config.json",
    load_failed: "Failed to load data",
};
