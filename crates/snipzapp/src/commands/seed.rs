//! Sample data for a fresh store.
//!
//! Seeding wipes every existing snippet, then inserts a fixed set of examples.
//! Tags go through the same normalization as user input.

use crate::error::Result;
use crate::model::{NewSnippet, Snippet};
use crate::store::SnippetStore;
use crate::tags::normalize_tags;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub removed: usize,
    pub created: Vec<Snippet>,
}

struct Sample {
    title: &'static str,
    code: &'static str,
    tags: &'static [&'static str],
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "React Hooks: useState",
        code: r#"import { useState } from 'react';

function Counter() {
  const [count, setCount] = useState(0);

  return (
    <div>
      <p>You clicked {count} times</p>
      <button onClick={() => setCount(count + 1)}>
        Click me
      </button>
    </div>
  );
}"#,
        tags: &["react", "hooks", "useState"],
    },
    Sample {
        title: "JavaScript: Async/Await Fetch",
        code: r#"async function fetchData(url) {
  try {
    const response = await fetch(url);
    if (!response.ok) {
      throw new Error('Network response was not ok');
    }
    const data = await response.json();
    return data;
  } catch (error) {
    console.error('Fetch error:', error);
  }
}

// Example usage:
fetchData('https://api.github.com/users/octocat')
  .then(data => console.log(data));"#,
        tags: &["javascript", "async", "fetch", "api"],
    },
    Sample {
        title: "Python: Flask Hello World",
        code: r#"from flask import Flask
app = Flask(__name__)

@app.route('/')
def hello_world():
    return 'Hello, World!'

if __name__ == '__main__':
    app.run(debug=True)"#,
        tags: &["python", "flask", "web"],
    },
    Sample {
        title: "Next.js: API Route",
        code: r#"// pages/api/hello.js
export default function handler(req, res) {
  res.status(200).json({ text: 'Hello' });
}"#,
        tags: &["nextjs", "api", "javascript"],
    },
    Sample {
        title: "SQL: Select with Join",
        code: r#"SELECT
    Users.name,
    Orders.order_date
FROM
    Users
INNER JOIN
    Orders ON Users.id = Orders.user_id;"#,
        tags: &["sql", "database", "join"],
    },
];

pub fn run<S: SnippetStore>(store: &mut S) -> Result<SeedReport> {
    let removed = store.delete_all()?;
    tracing::info!(removed, "cleared store before seeding");

    let mut created = Vec::with_capacity(SAMPLES.len());
    for sample in SAMPLES {
        let tags = normalize_tags(sample.tags.iter().map(|t| t.to_string()).collect());
        created.push(store.create(NewSnippet::new(sample.title, sample.code, &tags))?);
    }

    tracing::info!(count = created.len(), "seeded snippets");
    Ok(SeedReport { removed, created })
}
