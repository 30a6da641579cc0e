//! テンプレートのサンプルコード
//!
//! 表示用の固定ボイラープレート。テーマのタイトル・説明のみ差し込む。
//! カテゴリ固有のファイルは `category_sample` でカテゴリごとに選ぶ。

use crate::types::{Theme, ThemeCategory};

/// サンプルコード1ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFile {
    pub name: String,
    pub description: String,
    pub code: String,
}

impl CodeFile {
    fn new(name: &str, description: &str, code: String) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            code,
        }
    }
}

type SampleGenerator = fn(&Theme) -> Vec<CodeFile>;

/// カテゴリ固有ファイルの生成関数
pub fn category_sample(category: ThemeCategory) -> SampleGenerator {
    match category {
        ThemeCategory::Landing => landing_files,
        ThemeCategory::Dashboard => dashboard_files,
        ThemeCategory::Portfolio => portfolio_files,
        ThemeCategory::Ecommerce => ecommerce_files,
        ThemeCategory::Blog => blog_files,
    }
}

/// テーマのサンプルコード一式
pub fn code_files_for(theme: &Theme) -> Vec<CodeFile> {
    let mut files = vec![app_file(theme), navbar_file(theme)];
    files.extend(category_sample(theme.category)(theme));
    files.push(footer_file(theme));
    files.push(readme_file(theme));
    files
}

/// ファイル名で検索
pub fn find_code_file<'a>(files: &'a [CodeFile], name: &str) -> Option<&'a CodeFile> {
    files.iter().find(|f| f.name == name)
}

fn app_file(theme: &Theme) -> CodeFile {
    let page = primary_page(theme.category);
    CodeFile::new(
        "App.tsx",
        "Main application component with routing",
        format!(
            r##"import React from "react";
import {{ BrowserRouter, Routes, Route }} from "react-router-dom";
import Navbar from "./components/Navbar";
import Footer from "./components/Footer";
import {page} from "./pages/{page}";
import "./App.css";

function App() {{
  return (
    <BrowserRouter>
      <div className="flex flex-col min-h-screen">
        <Navbar />
        <main className="flex-grow">
          <Routes>
            <Route path="/" element={{<{page} />}} />
          </Routes>
        </main>
        <Footer />
      </div>
    </BrowserRouter>
  );
}}

export default App;"##
        ),
    )
}

fn primary_page(category: ThemeCategory) -> &'static str {
    match category {
        ThemeCategory::Landing => "HomePage",
        ThemeCategory::Dashboard => "DashboardPage",
        ThemeCategory::Portfolio => "ProjectsPage",
        ThemeCategory::Ecommerce => "ShopPage",
        ThemeCategory::Blog => "BlogPage",
    }
}

fn navbar_file(theme: &Theme) -> CodeFile {
    CodeFile::new(
        "components/Navbar.tsx",
        "Navigation bar component",
        format!(
            r##"import React, {{ useState }} from "react";
import {{ Link }} from "react-router-dom";
import {{ Menu, X }} from "lucide-react";

const Navbar = () => {{
  const [isMenuOpen, setIsMenuOpen] = useState(false);

  return (
    <nav className="bg-white shadow-sm dark:bg-gray-900">
      <div className="max-w-7xl mx-auto px-4 flex justify-between h-16">
        <Link to="/" className="flex items-center font-bold text-xl text-indigo-600">
          {brand}
        </Link>
        <button onClick={{() => setIsMenuOpen(!isMenuOpen)}} className="sm:hidden">
          {{isMenuOpen ? <X className="h-6 w-6" /> : <Menu className="h-6 w-6" />}}
        </button>
      </div>
    </nav>
  );
}};

export default Navbar;"##,
            brand = theme.brand()
        ),
    )
}

fn footer_file(theme: &Theme) -> CodeFile {
    CodeFile::new(
        "components/Footer.tsx",
        "Footer component",
        format!(
            r##"import React from "react";

const Footer = () => (
  <footer className="bg-white dark:bg-gray-900">
    <p className="py-8 text-center text-base text-gray-400">
      &copy; {title} Template. All rights reserved.
    </p>
  </footer>
);

export default Footer;"##,
            title = theme.title
        ),
    )
}

fn readme_file(theme: &Theme) -> CodeFile {
    CodeFile::new(
        "README.md",
        "Setup and customization guide",
        format!(
            r##"# {title}

{description}

## Getting Started

1. Create a new React project and install dependencies:

```bash
npm install react-router-dom lucide-react
npm install -D tailwindcss postcss autoprefixer
npx tailwindcss init -p
```

2. Copy the provided components into `src/`.

3. Start the development server:

```bash
npm start
```

The application will be available at http://localhost:3000."##,
            title = theme.title,
            description = theme.description
        ),
    )
}

fn landing_files(theme: &Theme) -> Vec<CodeFile> {
    let brand = theme.brand();
    let rest = theme.title.split_whitespace().skip(1).collect::<Vec<_>>().join(" ");
    vec![
        CodeFile::new(
            "components/Hero.tsx",
            "Hero section component for landing pages",
            format!(
                r##"import React from "react";

const Hero = () => (
  <section className="relative bg-white dark:bg-gray-900 py-24">
    <h1 className="text-5xl font-extrabold text-gray-900 dark:text-white">
      <span className="block">{brand}</span>
      <span className="block text-indigo-600">{rest}</span>
    </h1>
    <p className="mt-4 text-xl text-gray-500">{description}</p>
    <a href="#" className="mt-8 inline-flex px-8 py-3 rounded-md text-white bg-indigo-600">
      Get started
    </a>
  </section>
);

export default Hero;"##,
                description = theme.description
            ),
        ),
        CodeFile::new(
            "pages/HomePage.tsx",
            "Home page component",
            r##"import React from "react";
import Hero from "../components/Hero";

const HomePage = () => (
  <div>
    <Hero />
  </div>
);

export default HomePage;"##
                .to_string(),
        ),
    ]
}

fn dashboard_files(theme: &Theme) -> Vec<CodeFile> {
    vec![
        CodeFile::new(
            "components/StatCard.tsx",
            "Metric card for dashboard summaries",
            r##"import React from "react";

type StatCardProps = { label: string; value: string; delta: string };

const StatCard = ({ label, value, delta }: StatCardProps) => (
  <div className="rounded-lg bg-white dark:bg-gray-800 p-6 shadow">
    <p className="text-sm text-gray-500">{label}</p>
    <p className="mt-2 text-3xl font-semibold">{value}</p>
    <p className="mt-1 text-sm text-green-600">{delta}</p>
  </div>
);

export default StatCard;"##
                .to_string(),
        ),
        CodeFile::new(
            "pages/DashboardPage.tsx",
            "Dashboard overview page",
            format!(
                r##"import React from "react";
import StatCard from "../components/StatCard";

const DashboardPage = () => (
  <div className="p-8">
    <h1 className="text-2xl font-bold mb-6">{title}</h1>
    <div className="grid gap-6 md:grid-cols-3">
      <StatCard label="Users" value="12,480" delta="+4.2%" />
      <StatCard label="Revenue" value="$48,120" delta="+2.1%" />
      <StatCard label="Sessions" value="3,904" delta="+8.9%" />
    </div>
  </div>
);

export default DashboardPage;"##,
                title = theme.title
            ),
        ),
    ]
}

fn portfolio_files(theme: &Theme) -> Vec<CodeFile> {
    vec![CodeFile::new(
        "pages/ProjectsPage.tsx",
        "Project showcase grid",
        format!(
            r##"import React from "react";

const projects = ["Brand Identity", "Mobile App", "E-commerce Redesign"];

const ProjectsPage = () => (
  <section className="max-w-6xl mx-auto py-16 px-4">
    <h1 className="text-4xl font-bold mb-2">{brand}</h1>
    <p className="text-gray-500 mb-10">{description}</p>
    <div className="grid gap-8 md:grid-cols-3">
      {{projects.map((name) => (
        <article key={{name}} className="rounded-lg overflow-hidden shadow hover-card">
          <div className="aspect-video bg-gray-200" />
          <h2 className="p-4 font-medium">{{name}}</h2>
        </article>
      ))}}
    </div>
  </section>
);

export default ProjectsPage;"##,
            brand = theme.brand(),
            description = theme.description
        ),
    )]
}

fn ecommerce_files(theme: &Theme) -> Vec<CodeFile> {
    vec![
        CodeFile::new(
            "components/ProductCard.tsx",
            "Product listing card",
            r##"import React from "react";

type Product = { name: string; price: number; image: string };

const ProductCard = ({ product }: { product: Product }) => (
  <div className="group rounded-lg border p-4">
    <img src={product.image} alt={product.name} className="aspect-square object-cover" />
    <h3 className="mt-4 text-sm text-gray-700">{product.name}</h3>
    <p className="mt-1 text-lg font-medium">${product.price.toFixed(2)}</p>
    <button className="mt-3 w-full rounded-md bg-indigo-600 py-2 text-white">Add to cart</button>
  </div>
);

export default ProductCard;"##
                .to_string(),
        ),
        CodeFile::new(
            "pages/ShopPage.tsx",
            "Product catalog page",
            format!(
                r##"import React from "react";
import ProductCard from "../components/ProductCard";

const products = [
  {{ name: "Classic Tee", price: 24, image: "/images/tee.jpg" }},
  {{ name: "Canvas Tote", price: 18, image: "/images/tote.jpg" }},
];

const ShopPage = () => (
  <section className="max-w-7xl mx-auto py-16 px-4">
    <h1 className="text-3xl font-bold mb-8">{title}</h1>
    <div className="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
      {{products.map((p) => <ProductCard key={{p.name}} product={{p}} />)}}
    </div>
  </section>
);

export default ShopPage;"##,
                title = theme.title
            ),
        ),
    ]
}

fn blog_files(theme: &Theme) -> Vec<CodeFile> {
    vec![CodeFile::new(
        "pages/BlogPage.tsx",
        "Article list with category navigation",
        format!(
            r##"import React, {{ useState }} from "react";

const posts = [
  {{ title: "Designing for Readability", category: "Design" }},
  {{ title: "Shipping Faster with Templates", category: "Engineering" }},
];

const BlogPage = () => {{
  const [category, setCategory] = useState("All");
  const visible = category === "All" ? posts : posts.filter((p) => p.category === category);

  return (
    <section className="max-w-3xl mx-auto py-16 px-4">
      <h1 className="text-4xl font-bold mb-2">{title}</h1>
      <p className="text-gray-500 mb-8">{description}</p>
      <div className="flex gap-2 mb-8">
        {{["All", "Design", "Engineering"].map((c) => (
          <button key={{c}} onClick={{() => setCategory(c)}}>{{c}}</button>
        ))}}
      </div>
      {{visible.map((post) => (
        <article key={{post.title}} className="mb-6 border-b pb-6">
          <h2 className="text-2xl font-semibold">{{post.title}}</h2>
        </article>
      ))}}
    </section>
  );
}};

export default BlogPage;"##,
            title = theme.title,
            description = theme.description
        ),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn theme(id: &str) -> &'static Theme {
        Catalog::builtin().get_theme_by_id(id).expect("テーマが見つからない")
    }

    fn names(files: &[CodeFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_every_category_has_own_page() {
        let expected = [
            (ThemeCategory::Landing, "pages/HomePage.tsx"),
            (ThemeCategory::Dashboard, "pages/DashboardPage.tsx"),
            (ThemeCategory::Portfolio, "pages/ProjectsPage.tsx"),
            (ThemeCategory::Ecommerce, "pages/ShopPage.tsx"),
            (ThemeCategory::Blog, "pages/BlogPage.tsx"),
        ];
        let base = theme("saas-startup");
        for (category, page) in expected {
            let files = category_sample(category)(base);
            assert!(find_code_file(&files, page).is_some(), "{}: {}", category, page);
        }
    }

    #[test]
    fn test_landing_files() {
        let files = code_files_for(theme("saas-startup"));
        assert_eq!(
            names(&files),
            vec![
                "App.tsx",
                "components/Navbar.tsx",
                "components/Hero.tsx",
                "pages/HomePage.tsx",
                "components/Footer.tsx",
                "README.md",
            ]
        );
    }

    #[test]
    fn test_dashboard_files() {
        let files = code_files_for(theme("admin-dashboard"));
        assert!(find_code_file(&files, "pages/DashboardPage.tsx").is_some());
        assert!(find_code_file(&files, "components/Hero.tsx").is_none());
        let app = find_code_file(&files, "App.tsx").expect("App.tsx");
        assert!(app.code.contains("<DashboardPage />"));
    }

    #[test]
    fn test_theme_text_is_interpolated() {
        let blog = theme("professional-blog");
        let files = code_files_for(blog);

        let navbar = find_code_file(&files, "components/Navbar.tsx").expect("Navbar");
        assert!(navbar.code.contains("Professional"));

        let page = find_code_file(&files, "pages/BlogPage.tsx").expect("BlogPage");
        assert!(page.code.contains(&blog.title));
        assert!(page.code.contains(&blog.description));

        let footer = find_code_file(&files, "components/Footer.tsx").expect("Footer");
        assert!(footer.code.contains("Professional Blog Website Template"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let t = theme("online-marketplace");
        assert_eq!(code_files_for(t), code_files_for(t));
    }

    #[test]
    fn test_hero_splits_title() {
        let files = code_files_for(theme("saas-startup"));
        let hero = find_code_file(&files, "components/Hero.tsx").expect("Hero");
        assert!(hero.code.contains("<span className=\"block\">SaaS</span>"));
        assert!(hero.code.contains("Startup Landing Page"));
    }
}
