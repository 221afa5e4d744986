use indoc::indoc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("snippet catalog must contain at least one snippet")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub language: String,
    pub code: String,
    pub expected_output: String,
}

impl Snippet {
    pub fn new(
        language: impl Into<String>,
        code: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            expected_output: expected_output.into(),
        }
    }
}

/// Ordered, immutable and never empty. Positions wrap around its length.
#[derive(Debug, Clone)]
pub struct SnippetCatalog {
    snippets: Vec<Snippet>,
}

impl SnippetCatalog {
    pub fn new(snippets: Vec<Snippet>) -> Result<Self, CatalogError> {
        if snippets.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { snippets })
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    // Always false, `new` rejects an empty list.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> &Snippet {
        &self.snippets[index % self.snippets.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter()
    }

    /// Position reached from `index` by one step in `direction`.
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        let len = self.snippets.len();
        match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        }
    }

    pub fn max_code_lines(&self) -> usize {
        self.snippets
            .iter()
            .map(|s| s.code.lines().count())
            .max()
            .unwrap_or_default()
    }
}

impl Default for SnippetCatalog {
    fn default() -> Self {
        Self {
            snippets: vec![
                Snippet::new(
                    "python",
                    indoc! {"
                        def fibonacci(n):
                            if n <= 1:
                                return n
                            return fibonacci(n-1) + fibonacci(n-2)

                        print(fibonacci(10))"},
                    "55",
                ),
                Snippet::new(
                    "javascript",
                    indoc! {"
                        const quickSort = arr => {
                          if (arr.length <= 1) return arr;
                          const pivot = arr[arr.length - 1];
                          const left = arr.filter((x, i) => x <= pivot && i < arr.length - 1);
                          const right = arr.filter(x => x > pivot);
                          return [...quickSort(left), pivot, ...quickSort(right)];
                        };

                        console.log(quickSort([3, 6, 8, 10, 1, 2, 1]));"},
                    "[1, 1, 2, 3, 6, 8, 10]",
                ),
                Snippet::new(
                    "rust",
                    indoc! {r#"
                        fn is_prime(n: u32) -> bool {
                          if n <= 1 {
                            return false;
                          }
                          for i in 2..=(n as f64).sqrt() as u32 {
                            if n % i == 0 {
                              return false;
                            }
                          }
                          true
                        }

                        fn main() {
                          println!("{}", is_prime(17));
                        }"#},
                    "true",
                ),
            ],
        }
    }
}
