//! Response schemas for each generation endpoint.

use super::{Property, Schema};

static OUTPUT_PROPERTIES: [Property; 1] = [Property {
    name: "output",
    schema: Schema::string("The generated text"),
}];

pub static OUTPUT_SCHEMA: Schema =
    Schema::object("Response text", &OUTPUT_PROPERTIES, &["output"]);

static OPTION_SCHEMA: Schema = Schema::string("Answer option");

static MCQ_ITEM_PROPERTIES: [Property; 4] = [
    Property {
        name: "question",
        schema: Schema::string("The question text"),
    },
    Property {
        name: "options",
        schema: Schema::array("Answer options", &OPTION_SCHEMA),
    },
    Property {
        name: "answer",
        schema: Schema::string("Correct answer"),
    },
    Property {
        name: "explanation",
        schema: Schema::string("Explanation for the correct answer").nullable(),
    },
];

static MCQ_ITEM_SCHEMA: Schema = Schema::object(
    "A multiple-choice question",
    &MCQ_ITEM_PROPERTIES,
    &["question", "options", "answer"],
);

pub static MCQ_SCHEMA: Schema =
    Schema::array("List of multiple-choice questions", &MCQ_ITEM_SCHEMA);

static SUMMARY_PROPERTIES: [Property; 1] = [Property {
    name: "summary",
    schema: Schema::string("The summary text"),
}];

pub static SUMMARY_SCHEMA: Schema =
    Schema::object("Summarized text", &SUMMARY_PROPERTIES, &["summary"]);

static EVALUATION_PROPERTIES: [Property; 3] = [
    Property {
        name: "marks_scored",
        schema: Schema::integer("Marks scored for the given answer"),
    },
    Property {
        name: "explanation",
        schema: Schema::string(
            "Detailed explanation for the given marks and suggestions for improvement",
        ),
    },
    Property {
        name: "correct_answer",
        schema: Schema::string("The correct answer"),
    },
];

pub static EVALUATION_SCHEMA: Schema = Schema::object(
    "Evaluation",
    &EVALUATION_PROPERTIES,
    &["marks_scored", "explanation", "correct_answer"],
);
