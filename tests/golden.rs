//! Golden tests for rendered HTML
//!
//! Card fragments and full pages are compared against inline snapshots so a
//! markup change shows up as a reviewable diff.

use insta::assert_snapshot;

use folio::domain::services::CardRenderer;
use folio::{Catalog, PageRenderer, ProjectRecord};

#[test]
fn card_with_cover_escapes_every_field() {
    let record = ProjectRecord::new("ml-pipeline", "ML <Pipeline>")
        .with_summary(r#"Fast & "reliable""#)
        .with_tags(["Python"])
        .with_cover("https://img.example.com/p.png");

    assert_snapshot!(CardRenderer::new().render(&record).to_html(), @r##"
<a href="/projects/ml-pipeline" class="group rounded-xl overflow-hidden border border-black/5 dark:border-white/10 bg-white dark:bg-[#151515] hover:shadow-card transition block">
  <div class="aspect-video bg-black/5 dark:bg-white/5 overflow-hidden">
    <img src="https://img.example.com/p.png" alt="ML &lt;Pipeline&gt;" class="w-full h-full object-cover group-hover:scale-[1.02] transition" loading="lazy" width="1200" height="675">
  </div>
  <div class="p-4">
    <h3 class="font-semibold text-lg mb-1">ML &lt;Pipeline&gt;</h3>
    <p class="text-sm text-black/70 dark:text-white/70 line-clamp-3">Fast &amp; &quot;reliable&quot;</p>
    <div class="mt-3 flex flex-wrap gap-2">
      <span class="text-xs px-2 py-1 rounded bg-black/5 dark:bg-white/10">Python</span>
    </div>
  </div>
</a>
"##);
}

#[test]
fn card_without_cover_or_tags_is_text_only() {
    let record = ProjectRecord::new("notes", "Notes").with_summary("Plain text");

    assert_snapshot!(CardRenderer::new().render(&record).to_html(), @r##"
<a href="/projects/notes" class="group rounded-xl overflow-hidden border border-black/5 dark:border-white/10 bg-white dark:bg-[#151515] hover:shadow-card transition block">
  <div class="p-4">
    <h3 class="font-semibold text-lg mb-1">Notes</h3>
    <p class="text-sm text-black/70 dark:text-white/70 line-clamp-3">Plain text</p>
  </div>
</a>
"##);
}

#[test]
fn page_after_selecting_a_tag() {
    let catalog = Catalog::new(vec![
        ProjectRecord::new("a", "Alpha")
            .with_summary("First")
            .with_tags(["React"]),
        ProjectRecord::new("b", "Beta")
            .with_summary("Second")
            .with_tags(["Vue"]),
    ]);
    let mut session = catalog.browse();
    session.select_tag("Vue");

    assert_snapshot!(PageRenderer::new().page(&session), @r##"
<div class="flex flex-wrap gap-2 mb-6">
  <button type="button" class="text-xs px-3 py-1 rounded-full border transition hover:border-accent border-black/10 dark:border-white/20" aria-pressed="false">All</button>
  <button type="button" class="text-xs px-3 py-1 rounded-full border transition hover:border-accent border-black/10 dark:border-white/20" aria-pressed="false">React</button>
  <button type="button" class="text-xs px-3 py-1 rounded-full border transition bg-accent text-white border-accent" aria-pressed="true">Vue</button>
</div>
<div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
  <div data-slug="a" data-phase="leaving">
    <a href="/projects/a" class="group rounded-xl overflow-hidden border border-black/5 dark:border-white/10 bg-white dark:bg-[#151515] hover:shadow-card transition block">
      <div class="p-4">
        <h3 class="font-semibold text-lg mb-1">Alpha</h3>
        <p class="text-sm text-black/70 dark:text-white/70 line-clamp-3">First</p>
        <div class="mt-3 flex flex-wrap gap-2">
          <span class="text-xs px-2 py-1 rounded bg-black/5 dark:bg-white/10">React</span>
        </div>
      </div>
    </a>
  </div>
  <div data-slug="b" data-phase="present">
    <a href="/projects/b" class="group rounded-xl overflow-hidden border border-black/5 dark:border-white/10 bg-white dark:bg-[#151515] hover:shadow-card transition block">
      <div class="p-4">
        <h3 class="font-semibold text-lg mb-1">Beta</h3>
        <p class="text-sm text-black/70 dark:text-white/70 line-clamp-3">Second</p>
        <div class="mt-3 flex flex-wrap gap-2">
          <span class="text-xs px-2 py-1 rounded bg-black/5 dark:bg-white/10">Vue</span>
        </div>
      </div>
    </a>
  </div>
</div>
"##);
}
