//! Prompt construction for each endpoint, plus the answer-length gate applied
//! before an evaluation is requested.

pub fn mcq_prompt(text: &str, number_of_questions: &str, level: &str) -> String {
    format!(
        "Generate {} MCQs for the following text at level {}: {}",
        number_of_questions, level, text
    )
}

pub fn summary_prompt(text: &str) -> String {
    format!("Summarize the following text: {}", text)
}

pub fn evaluation_prompt(question: &str, answer: &str, max_marks: &str) -> String {
    format!(
        "Evaluate the following answer to the question. Provide a comprehensive evaluation \
         including marks out of {}, detailed explanation of the score, suggestions for \
         improvement, and the correct answer. \n\nQuestion: {} \n\nAnswer: {}",
        max_marks, question, answer
    )
}

/// Minimum number of answer lines expected for `max_marks`.
pub fn required_lines(max_marks: f64) -> f64 {
    if max_marks == 1.0 {
        1.0
    } else {
        max_marks * 2.0
    }
}

/// Number of lines in `answer`, counting segments between `\n` separators.
pub fn answer_lines(answer: &str) -> usize {
    answer.split('\n').count()
}

/// Coerce a query value to a number the way JavaScript's `Number()` does.
///
/// Surrounding whitespace is ignored, an empty string is `0`, `0x`/`0o`/`0b`
/// prefixes select a radix, and only the literal `Infinity` (optionally
/// signed) is infinite. Anything else that is not a decimal literal is `NaN`.
pub fn coerce_number(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }

    match value {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match value.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &value[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0, |acc: f64, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    // `str::parse` also accepts "inf" and "nan", which JavaScript does not.
    let decimal = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal {
        return f64::NAN;
    }
    value.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a number the way JavaScript stringifies it in a template literal.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    format!("{}", value)
}

/// How many lines `answer` is short of the minimum for `max_marks`.
///
/// Returns `None` when the answer is long enough. A `max_marks` value that
/// coerces to `NaN` never triggers the gate.
pub fn missing_answer_lines(answer: &str, max_marks: &str) -> Option<f64> {
    let required = required_lines(coerce_number(max_marks));
    let actual = answer_lines(answer) as f64;

    (actual < required).then(|| required - actual)
}

pub fn answer_too_short_message(missing_lines: f64) -> String {
    format!(
        "Answer is too short. You need to write at least {} more lines.",
        format_number(missing_lines)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mcq_prompt_interpolates_all_fields() {
        assert_eq!(
            mcq_prompt("Photosynthesis converts light", "3", "easy"),
            "Generate 3 MCQs for the following text at level easy: Photosynthesis converts light"
        );
    }

    #[test]
    fn summary_prompt_prefixes_text() {
        assert_eq!(
            summary_prompt("Rust is fast."),
            "Summarize the following text: Rust is fast."
        );
    }

    #[test]
    fn evaluation_prompt_carries_marks_question_and_answer() {
        let prompt = evaluation_prompt("What is ownership?", "Each value has one owner.", "2");

        assert!(prompt.starts_with("Evaluate the following answer to the question."));
        assert!(prompt.contains("marks out of 2,"));
        assert!(prompt.ends_with(
            "\n\nQuestion: What is ownership? \n\nAnswer: Each value has one owner."
        ));
    }

    #[test]
    fn one_mark_needs_a_single_line() {
        assert_eq!(required_lines(1.0), 1.0);
        assert_eq!(missing_answer_lines("one line", "1"), None);
    }

    #[test]
    fn other_marks_need_twice_as_many_lines() {
        assert_eq!(required_lines(0.0), 0.0);
        assert_eq!(required_lines(2.0), 4.0);
        assert_eq!(required_lines(5.0), 10.0);
    }

    #[test]
    fn short_answer_reports_deficit() {
        assert_eq!(missing_answer_lines("line1", "3"), Some(5.0));
        assert_eq!(missing_answer_lines("a\nb\nc", "2"), Some(1.0));
    }

    #[test]
    fn gate_is_exact_at_threshold() {
        for marks in 2..=6u32 {
            let required = (marks * 2) as usize;
            let enough = vec!["x"; required].join("\n");
            let short = vec!["x"; required - 1].join("\n");

            assert_eq!(missing_answer_lines(&enough, &marks.to_string()), None);
            assert_eq!(missing_answer_lines(&short, &marks.to_string()), Some(1.0));
        }
    }

    #[test]
    fn line_count_includes_trailing_empty_segment() {
        assert_eq!(answer_lines("a\n"), 2);
        assert_eq!(answer_lines(""), 1);
        assert_eq!(answer_lines("a\r\nb"), 2);
    }

    #[test]
    fn unparseable_marks_skip_the_gate() {
        assert_eq!(missing_answer_lines("x", "ten"), None);
        assert_eq!(missing_answer_lines("x", "NaN"), None);
        assert_eq!(missing_answer_lines("x", "inf"), None);
        assert_eq!(missing_answer_lines("x", "infinity"), None);
        assert_eq!(missing_answer_lines("x", "0x"), None);
        assert_eq!(missing_answer_lines("x", "0b12"), None);
    }

    #[test]
    fn radix_prefixed_marks_are_coerced() {
        assert_eq!(coerce_number("0x2"), 2.0);
        assert_eq!(coerce_number("0XfF"), 255.0);
        assert_eq!(coerce_number("0b10"), 2.0);
        assert_eq!(coerce_number("0o7"), 7.0);
        assert!(coerce_number("-0x2").is_nan());

        assert_eq!(missing_answer_lines("x", "0x2"), Some(3.0));
        assert_eq!(missing_answer_lines("x", "0b10"), Some(3.0));
        assert_eq!(missing_answer_lines("x", "0o7"), Some(13.0));
    }

    #[test]
    fn only_literal_infinity_is_infinite() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number(" +Infinity "), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("infinity").is_nan());
        assert!(coerce_number("nan").is_nan());
    }

    #[test]
    fn infinite_marks_reject_with_infinite_deficit() {
        let missing = missing_answer_lines("x", "Infinity").unwrap();

        assert!(missing.is_infinite());
        assert_eq!(
            answer_too_short_message(missing),
            "Answer is too short. You need to write at least Infinity more lines."
        );
        assert_eq!(missing_answer_lines("x", "-Infinity"), None);
    }

    #[test]
    fn decimal_coercion_follows_number_literals() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("  4 "), 4.0);
        assert_eq!(coerce_number("+1"), 1.0);
        assert_eq!(coerce_number("1."), 1.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("2e1"), 20.0);
        assert!(coerce_number("1e").is_nan());
        assert!(coerce_number("3 marks").is_nan());
    }

    #[test]
    fn numbers_render_like_javascript() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(123456.0), "123456");
    }

    #[test]
    fn marks_are_trimmed_and_may_be_fractional() {
        assert_eq!(missing_answer_lines("x", " 3 "), Some(5.0));
        assert_eq!(missing_answer_lines("x", "0.75"), Some(0.5));
        assert_eq!(missing_answer_lines("x", "1.0"), None);
    }

    #[test]
    fn message_renders_whole_and_fractional_deficits() {
        assert_eq!(
            answer_too_short_message(5.0),
            "Answer is too short. You need to write at least 5 more lines."
        );
        assert_eq!(
            answer_too_short_message(0.5),
            "Answer is too short. You need to write at least 0.5 more lines."
        );
    }
}
