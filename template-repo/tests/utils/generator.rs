use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rand::seq::SliceRandom;
use template_repo::template_repo::NewTemplate;
use uuid::Uuid;

trait Generator<T> {
    fn gen(&mut self) -> T;
}

struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

struct FakeContent;

impl Generator<String> for FakeContent {
    fn gen(&mut self) -> String {
        Sentence(3..8).fake()
    }
}

/// Codes are unique per call so SQLx cases do not collide with rows left by earlier runs.
struct UniqueCode;

impl Generator<String> for UniqueCode {
    fn gen(&mut self) -> String {
        "test-template-".to_owned() + &Uuid::new_v4().simple().to_string()
    }
}

#[allow(dead_code)]
pub struct NewTemplateGenerator {
    code_gen: Box<dyn Generator<String>>,
    lang_gen: Box<dyn Generator<String>>,
    content_gen: Box<dyn Generator<String>>,
    version_gen: Box<dyn Generator<i32>>,
}

#[allow(dead_code)]
impl NewTemplateGenerator {
    pub fn generate(&mut self) -> NewTemplate {
        NewTemplate::new(
            self.code_gen.gen(),
            self.lang_gen.gen(),
            self.content_gen.gen(),
            self.version_gen.gen(),
        )
    }

    /// A fresh payload for an existing template: same code, different body.
    pub fn generate_update(&mut self, code: &str) -> NewTemplate {
        let mut template = self.generate();
        template.code = code.to_owned();
        template
    }
}

impl Default for NewTemplateGenerator {
    fn default() -> Self {
        NewTemplateGenerator {
            code_gen: Box::new(UniqueCode),
            lang_gen: RandomSample::boxed(vec![
                "en".to_string(),
                "de".to_string(),
                "fr".to_string(),
                "pt-BR".to_string(),
            ]),
            content_gen: Box::new(FakeContent),
            version_gen: RandomSample::boxed(vec![1, 2, 3, 7]),
        }
    }
}
