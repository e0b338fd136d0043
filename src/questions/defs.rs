use crate::model::{Answer, Question};

#[derive(Debug, Clone, Copy)]
pub struct QuestionDef {
    pub title: &'static str,
    pub prompt: &'static str,
    pub answers: &'static [(&'static str, u32)],
}

const INVESTMENT_MIX: &[(&str, u32)] = &[
    ("real estate", 0),
    ("crypto", 100),
    ("stocks", 50),
    ("collectibles (art, classic cars, etc.)", 25),
    ("a mix of two or more of the above", 20),
];
const DECISION_WORRY: &[(&str, u32)] = &[
    ("all the time", 0),
    ("regularly", 25),
    ("sometimes", 50),
    ("rarely", 75),
    ("never", 100),
];
const DECISION_REGRET: &[(&str, u32)] = &[
    ("yes, many", 0),
    ("yes, a few", 30),
    ("yes, one", 50),
    ("not quite sure", 70),
    ("no, never", 100),
];
const CLOSING: &[(&str, u32)] = &[
    ("yes", 0),
    ("yes, but no", 30),
    ("yes, and no", 50),
    ("not quite sure", 70),
    ("no", 100),
];

const BUILTIN_QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        title: "Question one",
        prompt: "I am mostly invested in...",
        answers: INVESTMENT_MIX,
    },
    QuestionDef {
        title: "Question two",
        prompt: "I worry about my investment decisions.",
        answers: DECISION_WORRY,
    },
    QuestionDef {
        title: "Question three",
        prompt: "I have made investment decisions in the past that I regret.",
        answers: DECISION_REGRET,
    },
    QuestionDef {
        title: "Question four",
        prompt: "Last question.",
        answers: CLOSING,
    },
];

pub fn builtin_questions() -> &'static [QuestionDef] {
    BUILTIN_QUESTIONS
}

pub fn instantiate(defs: &[QuestionDef]) -> Vec<Question> {
    defs.iter()
        .map(|def| {
            let answers = def
                .answers
                .iter()
                .map(|&(label, points)| Answer {
                    label: label.to_string(),
                    points,
                })
                .collect();
            Question::new(def.title, def.prompt, answers)
        })
        .collect()
}
