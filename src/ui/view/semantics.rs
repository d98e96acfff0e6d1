//! 语义树
//!
//! `render` 在绘制的同时产出一棵语义树，记录每个控件的角色、名称和所在区域。
//! 鼠标命中测试和集成测试都通过它按角色查找控件，而不是去解析终端字符。

use ratatui::layout::{Position, Rect};

/// 控件角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    List,
    ListItem,
    TextBox,
    Button,
}

/// 语义节点
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub role: Role,
    /// 可访问名称：标题文字、条目文字或按钮文字
    pub name: String,
    /// 输入框当前的值
    pub value: String,
    pub placeholder: Option<String>,
    /// 滚出可视范围的条目区域为空
    pub area: Rect,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(role: Role, name: impl Into<String>, area: Rect) -> Self {
        Self {
            role,
            name: name.into(),
            value: String::new(),
            placeholder: None,
            area,
            children: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }
}

/// 一帧的语义树（按文档顺序）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    nodes: Vec<Node>,
}

impl Screen {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// 先序遍历所有节点
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.collect(&mut out);
        }
        out
    }

    pub fn all_by_role(&self, role: Role) -> Vec<&Node> {
        self.walk().into_iter().filter(|n| n.role == role).collect()
    }

    pub fn by_role(&self, role: Role) -> Option<&Node> {
        self.walk().into_iter().find(|n| n.role == role)
    }

    /// 按角色和名称查找，名称忽略大小写、部分匹配
    pub fn by_role_and_name(&self, role: Role, name: &str) -> Option<&Node> {
        let needle = name.to_lowercase();
        self.walk()
            .into_iter()
            .find(|n| n.role == role && n.name.to_lowercase().contains(&needle))
    }

    /// 按占位文字查找，忽略大小写、部分匹配
    pub fn by_placeholder(&self, text: &str) -> Option<&Node> {
        let needle = text.to_lowercase();
        self.walk().into_iter().find(|n| {
            n.placeholder
                .as_ref()
                .is_some_and(|p| p.to_lowercase().contains(&needle))
        })
    }

    /// 返回包含该坐标的最深层节点
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&Node> {
        let position = Position::new(column, row);
        self.walk()
            .into_iter()
            .filter(|n| n.area.contains(position))
            .last()
    }
}
