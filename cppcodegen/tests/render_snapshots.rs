//! Snapshot tests for whole rendered trees.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use cppcodegen::{AccessSpecifier, Block, Class, Config, Indent, Render, Snippet};

fn header_file() -> String {
    let system = Snippet::system_include().with_lines(["cstdint", "string"]);
    let local = Snippet::local_include("core/").with_line("types.h");

    let getter = Block::definition("const std::string& name() const").with_line("return name_;");
    let widget = Class::new("Widget")
        .with_line("explicit Widget(std::string name);", AccessSpecifier::Public)
        .with_node(&getter, AccessSpecifier::Public)
        .with_line("virtual void draw() = 0;", AccessSpecifier::Protected)
        .with_lines(["std::string name_;", "std::uint32_t id_;"], AccessSpecifier::Private);

    let ns = Block::namespace("ui").with_node(&widget);

    let mut file = Snippet::line();
    file.push_line("#pragma once")
        .push_node(&system)
        .push_node(&local)
        .push_line("")
        .push_node(&ns);
    file.render()
}

#[test]
fn test_header_file() {
    insta::assert_snapshot!(header_file(), @r#"
#pragma once
#include <cstdint>
#include <string>
#include "core/types.h"

namespace ui {
  class Widget {
   public:
    explicit Widget(std::string name);
    const std::string& name() const {
      return name_;
    }
   protected:
    virtual void draw() = 0;
   private:
    std::string name_;
    std::uint32_t id_;
  };
}
"#);
}

#[test]
fn test_class_in_namespace() {
    let class = Class::new("X").with_line("int v;", AccessSpecifier::Public);
    let ns = Block::namespace("N").with_node(&class);

    assert_eq!(ns.snippets().len(), 1);
    insta::assert_snapshot!(ns.render(), @r"
namespace N {
  class X {
   public:
    int v;
  };
}
");
}

#[test]
fn test_public_and_private_members() {
    let mut foo = Class::new("Foo");
    foo.push_line("int x;", AccessSpecifier::Public)
        .push_line("int y;", AccessSpecifier::Private);

    assert_eq!(
        foo.render(),
        "class Foo {\n public:\n  int x;\n private:\n  int y;\n};\n"
    );
}

#[test]
fn test_configured_indent() {
    let config: Config = "[indent]\nwidth = 4\n".parse().unwrap();

    let body = Block::definition("int main()")
        .with_indent(config.indent())
        .with_line("return 0;");
    let ns = Block::namespace("app")
        .with_indent(config.indent())
        .with_node(&body);

    insta::assert_snapshot!(ns.render(), @r"
namespace app {
    int main() {
        return 0;
    }
}
");
}

#[test]
fn test_reindent_whole_tree() {
    let mut ns = Block::namespace("outer")
        .with_node(&Block::namespace("inner").with_line("void f();"))
        .with_line("void g();");
    ns.increment_indent(1);

    assert_eq!(ns.indent().level(), 1);
    for snippet in ns.snippets() {
        assert_eq!(snippet.indent().level(), 2);
    }
    assert_eq!(
        ns.render(),
        "  namespace outer {\n    namespace inner {\n      void f();\n    }\n    void g();\n  }\n"
    );
}

#[test]
fn test_tab_indent_children_use_spaces() {
    let block = Block::code_block()
        .with_indent(Indent::tabs())
        .with_node(&Block::code_block().with_indent(Indent::tabs()).with_line("x++;"));

    assert_eq!(block.render(), "{\n {\n  x++;\n }\n}\n");
}

#[test]
fn test_display_matches_render() {
    let class = Class::new("Empty");
    assert_eq!(class.to_string(), class.render());
    assert_eq!(format!("{}", Block::code_block()), "{\n}\n");
}
