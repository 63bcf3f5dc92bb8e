//! Outgoing request: birth data, computed chart, prompt text and schema.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bazi_base::{BirthInstant, CivilDate, FourPillars, PillarCalculator};
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::ReportError;

/// Fixed system text sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "你是一位精通中国传统命理学和八字算命的大师。\
你的任务是根据用户提供的公历出生年月日、时辰、性别以及已排好的四柱，\
生成一份专业、详细且易于理解的八字命盘分析报告。请确保所有术语都使用简体中文。\
请严格按照指定的JSON格式输出，不要包含任何markdown标记。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Chinese term used in the prompt.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "男性",
            Self::Female => "女性",
        }
    }
}

impl FromStr for Gender {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(ReportError::InvalidGender(s.to_string())),
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

/// Everything the narrative service needs for one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub birth_date: CivilDate,
    pub birth_hour: u8,
    pub gender: Gender,
    pub pillars: FourPillars,
}

impl ReportRequest {
    pub fn new(birth: &BirthInstant, gender: Gender, pillars: FourPillars) -> Self {
        Self {
            birth_date: birth.date(),
            birth_hour: birth.hour(),
            gender,
            pillars,
        }
    }

    /// Build a request, computing the pillars with `calc`.
    pub fn compute(
        birth: &BirthInstant,
        gender: Gender,
        calc: &PillarCalculator,
    ) -> Result<Self, ReportError> {
        Ok(Self::new(birth, gender, calc.calculate(birth)?))
    }

    /// User prompt carrying the birth data and the computed chart.
    pub fn prompt(&self) -> String {
        let (y, m, d) = self.birth_date.ymd();
        let chart = self
            .pillars
            .iter()
            .map(|(slot, pillar)| format!("{} {pillar}", slot.label()))
            .collect::<Vec<_>>()
            .join("，");
        format!(
            "请为出生于公历 {y}年{m:02}月{d:02}日 {hour}时 的{gender}生成八字命盘和一份详细的分析报告。\
             已排出的四柱为：{chart}。",
            hour = self.birth_hour,
            gender = self.gender.label(),
        )
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn pillar_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "description": description,
        "properties": {
            "stem": { "type": "string", "description": format!("{description}天干") },
            "branch": { "type": "string", "description": format!("{description}地支") }
        },
        "required": ["stem", "branch"]
    })
}

/// JSON schema of the structured response: four pillars plus six sections.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "pillars": {
                "type": "object",
                "description": "四柱八字",
                "properties": {
                    "year": pillar_schema("年柱"),
                    "month": pillar_schema("月柱"),
                    "day": pillar_schema("日柱"),
                    "hour": pillar_schema("时柱")
                },
                "required": ["year", "month", "day", "hour"]
            },
            "analysis": {
                "type": "object",
                "description": "命盘分析",
                "properties": {
                    "mingZhu": { "type": "string", "description": "关于命主（日主）的简要描述" },
                    "personality": { "type": "string", "description": "性格分析" },
                    "career": { "type": "string", "description": "事业和财运分析" },
                    "relationship": { "type": "string", "description": "感情和婚姻分析" },
                    "health": { "type": "string", "description": "健康建议" },
                    "summary": { "type": "string", "description": "综合运势总结和建议" }
                },
                "required": ["mingZhu", "personality", "career", "relationship", "health", "summary"]
            }
        },
        "required": ["pillars", "analysis"]
    })
}
