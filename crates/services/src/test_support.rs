use flashdeck_core::model::{
    Answer, Category, Deadline, DueDate, FlashCard, Question, Rating, Task,
};

pub fn card(question: &str, answer: &str, rating: Rating) -> FlashCard {
    card_in(question, answer, rating, &[])
}

pub fn card_in(question: &str, answer: &str, rating: Rating, categories: &[&str]) -> FlashCard {
    FlashCard::new(
        Question::new(question).unwrap(),
        Answer::new(answer).unwrap(),
        rating,
        Category::set_from(categories).unwrap(),
    )
}

pub fn deadline(task: &str, due: &str) -> Deadline {
    Deadline::new(Task::new(task).unwrap(), DueDate::parse(due).unwrap())
}
